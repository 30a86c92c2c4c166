//! Port traits — the boundary between the gradient engine and the
//! outside world.
//!
//! Driven adapters (the ADC, a serial byte feed, the log console)
//! implement these traits; the engine consumes them via generics and
//! never touches hardware directly. Swapping the production ADC for a
//! test-injected source is a construction-time wiring decision, not a
//! compiled-in branch.

/// Read-side port: produces one raw ADC sample per call.
///
/// Must always return a value — absence of fresh input is the adapter's
/// concern (e.g. [`StreamSource`](crate::source::StreamSource) holds its
/// last decoded value).
pub trait RawSource {
    fn read_raw(&mut self) -> u16;
}

/// Diagnostic port: receives one report line at a time.
pub trait DiagnosticSink {
    fn emit(&mut self, line: &str);
}
