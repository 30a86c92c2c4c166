//! System configuration parameters.
//!
//! All tunable parameters for the gradient engine. Values can be
//! overridden by the integrator before construction.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// ADC1 channel the TMP36 output is wired to. Opaque to the engine
    /// itself — only the ADC source adapter interprets it.
    pub pin: i32,
    /// Gradient window: number of per-tick temperature deltas averaged.
    /// Must be at least 1; the `u8` type bounds it at 255.
    pub window: u8,
    /// Sample loop interval (milliseconds).
    pub sample_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pin: 4,
            window: 16,
            sample_interval_ms: 1000, // 1 Hz
        }
    }
}

impl EngineConfig {
    /// Reject configurations that would break the engine later.
    ///
    /// A zero window would make the mean divide by zero on the first
    /// full-buffer check, so it is refused here rather than detected
    /// mid-flight.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::InvalidConfig("window must be >= 1"));
        }
        if self.sample_interval_ms == 0 {
            return Err(Error::InvalidConfig("sample interval must be nonzero"));
        }
        Ok(())
    }
}
