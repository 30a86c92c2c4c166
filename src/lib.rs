//! Thermgrad firmware library.
//!
//! Samples a TMP36 analog temperature sensor, converts each raw ADC
//! reading to degrees Fahrenheit, and tracks a smoothed rate-of-change
//! (gradient) over a fixed window of per-tick temperature deltas.
//!
//! Exposes the pure-logic modules for host-side testing. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod config;
pub mod convert;
pub mod engine;
pub mod history;
pub mod ports;
pub mod sink;
pub mod source;

mod error;

pub use error::{Error, Result};
