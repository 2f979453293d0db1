//! Console adapter - Writes notifications to stdout and waits for the user

use std::io::{self, BufRead, Write};
use crate::domain::traits::OutputSink;

/// Output sink backed by the process's standard output
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    /// Block until the user presses Enter.
    ///
    /// EOF on stdin counts as a key press so piped runs still exit.
    pub fn wait_for_key(&self) -> io::Result<()> {
        tracing::debug!("Waiting for key press");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
