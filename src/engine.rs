//! Gradient engine — one read/convert/diff/store/average cycle per tick.
//!
//! Single-threaded and synchronous: the engine is driven by a periodic
//! caller, holds unshared mutable state, and `update()` runs to
//! completion without blocking. The raw source is called exactly once
//! per tick.

use core::fmt::Write as _;

use heapless::String;
use log::debug;

use crate::config::EngineConfig;
use crate::convert::raw_to_fahrenheit;
use crate::error::Result;
use crate::history::DeltaHistory;
use crate::ports::{DiagnosticSink, RawSource};

/// One sampling cycle's output.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Unconverted ADC reading for this tick.
    pub raw: u16,
    /// Converted temperature.
    pub fahrenheit: f32,
    /// Mean per-tick delta over the window, once enough history exists.
    /// `None` while bootstrapping or until the window first fills.
    pub gradient: Option<f32>,
}

/// Owns the sampling state: the previous temperature and the delta ring.
///
/// `last` is `None` until the first reading lands, so the bootstrap tick
/// is detected explicitly instead of by an out-of-range sentinel value.
pub struct GradientEngine<S: RawSource> {
    source: S,
    history: DeltaHistory,
    last: Option<f32>,
}

impl<S: RawSource> GradientEngine<S> {
    /// Construct an engine over `source` with the configured window.
    ///
    /// Fails with [`Error::InvalidConfig`](crate::Error::InvalidConfig)
    /// if the config does not validate (zero window).
    pub fn new(config: &EngineConfig, source: S) -> Result<Self> {
        config.validate()?;
        debug!("gradient engine: window={}", config.window);
        Ok(Self {
            source,
            history: DeltaHistory::new(config.window as usize),
            last: None,
        })
    }

    /// Run one sampling cycle.
    ///
    /// Reads the source once, converts, and — when a previous reading
    /// exists — pushes the delta into the history ring. The gradient is
    /// reported only when the ring holds a full window; partial windows
    /// and the bootstrap tick report `None`.
    pub fn update(&mut self) -> Sample {
        let raw = self.source.read_raw();
        let curr = raw_to_fahrenheit(raw);
        let prev = self.last.replace(curr);

        let Some(prev) = prev else {
            // Bootstrap: nothing to diff against yet.
            return Sample {
                raw,
                fahrenheit: curr,
                gradient: None,
            };
        };

        self.history.push(curr - prev);

        let gradient = self.history.is_full().then(|| self.history.mean());
        Sample {
            raw,
            fahrenheit: curr,
            gradient,
        }
    }

    /// Write a one-line-per-item state report to `sink`.
    ///
    /// Purely observational — no engine state changes.
    pub fn dump(&self, sink: &mut impl DiagnosticSink) {
        let mut line: String<48> = String::new();

        let _ = write!(line, "window = {}", self.history.capacity());
        sink.emit(&line);

        line.clear();
        let _ = write!(line, "valid = {}", self.history.len());
        sink.emit(&line);

        line.clear();
        let _ = write!(line, "write_index = {}", self.history.write_index());
        sink.emit(&line);

        for (i, slot) in self.history.slots().iter().enumerate() {
            line.clear();
            let _ = write!(line, "slot[{i}] = {slot:.3}");
            sink.emit(&line);
        }
    }
}
