//! In-memory adapter - Captures notifications instead of printing them

use std::sync::Mutex;
use crate::domain::traits::OutputSink;

/// Output sink that keeps every line it is given
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_kept_in_order() {
        let sink = MemorySink::new();
        assert!(sink.lines().is_empty());

        sink.write_line("first");
        sink.write_line("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
    }
}
