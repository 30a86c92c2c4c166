//! TMP36 analog temperature conversion.
//!
//! The sensor outputs 10 mV/°C with a 500 mV offset, read through a
//! 10-bit ADC. The board divides the sensor output by five before the
//! ADC pin, so the raw reading is scaled back up by [`RAW_SCALE`] prior
//! to normalising against [`ADC_FULL_SCALE`]. These constants are board
//! calibration values — do not change them without re-measuring.

/// Multiplier restoring the divided-down sensor voltage.
pub const RAW_SCALE: f32 = 5.0;

/// Full-scale count of the 10-bit ADC.
pub const ADC_FULL_SCALE: f32 = 1024.0;

/// TMP36 offset: 0.5 V at 0 °C.
const ZERO_C_OFFSET: f32 = 0.5;

/// TMP36 slope: 100 °C per volt-fraction unit.
const DEGREES_PER_UNIT: f32 = 100.0;

/// Convert a raw ADC reading to degrees Fahrenheit.
///
/// Pure and total over `u16`; readings outside the sensor's calibrated
/// range produce physically meaningless (but well-defined) values.
pub fn raw_to_fahrenheit(raw: u16) -> f32 {
    let volts = f32::from(raw) * RAW_SCALE / ADC_FULL_SCALE;
    let celsius = (volts - ZERO_C_OFFSET) * DEGREES_PER_UNIT;
    celsius * 9.0 / 5.0 + 32.0
}
