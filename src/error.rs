//! Unified error types for the thermgrad firmware.
//!
//! A single `Error` enum that every fallible path converts into, keeping
//! the entry point's error handling uniform. All variants are `Copy` so
//! they can be passed around without allocation.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
///
/// The sampling cycle itself is total — once an engine is constructed,
/// `update()` cannot fail. Errors arise only from construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid (e.g. a zero-capacity window).
    InvalidConfig(&'static str),
    /// Peripheral initialisation failed (ESP-IDF return code).
    Init(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Init(rc) => write!(f, "peripheral init failed (rc={rc})"),
        }
    }
}

impl core::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
