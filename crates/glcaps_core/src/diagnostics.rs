//! Diagnostic output
//!
//! Initialization writes one `"<LABEL> = <value>"` line per driver string
//! to an injected sink.

use std::cell::RefCell;

use crate::driver::DriverString;

/// Receives formatted diagnostic lines.
pub trait DiagnosticSink {
    fn line(&self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn line(&self, line: &str) {
        (**self).line(line)
    }
}

/// Emits each line as an `info` event on the `glcaps` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn line(&self, line: &str) {
        tracing::info!(target: "glcaps", "{line}");
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Value of the first line with this label. Empty values come back as "".
    pub fn value(&self, which: DriverString) -> Option<String> {
        let prefix = format!("{} =", which.label());
        self.lines.borrow().iter().find_map(|l| {
            let rest = l.strip_prefix(&prefix)?;
            if rest.is_empty() {
                Some(String::new())
            } else {
                rest.strip_prefix(' ').map(str::to_string)
            }
        })
    }
}

impl DiagnosticSink for MemorySink {
    fn line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// `"<LABEL> = <value>"`, or `"<LABEL> ="` when there is no value.
pub(crate) fn emit(sink: &dyn DiagnosticSink, which: DriverString, value: &str) {
    if value.is_empty() {
        sink.line(&format!("{} =", which.label()));
    } else {
        sink.line(&format!("{} = {}", which.label(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_formats_label_and_value() {
        let sink = MemorySink::new();
        emit(&sink, DriverString::Vendor, "ARM");
        emit(&sink, DriverString::Renderer, "Mali-G78");
        assert_eq!(sink.lines(), vec!["GL_VENDOR = ARM", "GL_RENDERER = Mali-G78"]);
        assert_eq!(sink.value(DriverString::Renderer).as_deref(), Some("Mali-G78"));
        assert_eq!(sink.value(DriverString::Version), None);
    }

    #[test]
    fn empty_value_has_no_trailing_space() {
        let sink = MemorySink::new();
        emit(&sink, DriverString::Extensions, "");
        assert_eq!(sink.lines(), vec!["GL_EXTENSIONS ="]);
        assert_eq!(sink.value(DriverString::Extensions).as_deref(), Some(""));
    }
}
