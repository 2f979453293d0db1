//! Output adapters - Where colleagues report what they receive

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;
