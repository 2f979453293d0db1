/// Output sink - where colleagues report the messages they receive
pub trait OutputSink: Send + Sync {
    /// Write one complete line
    fn write_line(&self, line: &str);
}
