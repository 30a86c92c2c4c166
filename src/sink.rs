//! Diagnostic sink adapters.
//!
//! [`LogSink`] forwards report lines to the `log` facade (UART /
//! USB-CDC in production). [`VecSink`] captures them for host-side
//! assertions.

use log::info;

use crate::ports::DiagnosticSink;

/// Adapter that writes every report line to the serial console.
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&mut self, line: &str) {
        info!("DUMP | {line}");
    }
}

/// Capturing sink for host-side tests.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct VecSink {
    pub lines: Vec<String>,
}

#[cfg(not(target_os = "espidf"))]
impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_os = "espidf"))]
impl DiagnosticSink for VecSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
