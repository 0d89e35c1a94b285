//! Formatting and recording of diagnostics.
use crate::scanner::ScanError;
use crate::source_map;

/// Receives diagnostics, prints them to the error stream, and remembers
/// whether any were seen. The flag has an explicit lifecycle: [`reset`] at
/// the start of a scan invocation, [`had_error`] read once by the caller
/// afterwards. Reporting never halts execution; exit policy belongs to the
/// caller.
///
/// [`reset`]: Reporter::reset
/// [`had_error`]: Reporter::had_error
pub struct Reporter {
    had_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self { had_error: false }
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Reports a diagnostic with no context beyond its line.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    pub fn report(&mut self, line: usize, context: &str, message: &str) {
        eprintln!("[line {}] Error{}: {}", line, context, message);
        self.had_error = true;
    }

    /// Reports a scan error, echoing the offending source line under it.
    pub fn describe(&mut self, error: &ScanError, source: &str) {
        self.error(error.line, &error.to_string());
        if let Some(text) = source_map::line_text(source, error.line) {
            eprintln!("{}| {}", error.line, text);
        }
    }
}
