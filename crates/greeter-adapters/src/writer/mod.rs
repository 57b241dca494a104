//! Writer adapters.

mod console;
mod memory;

pub use console::ConsoleWriter;
pub use memory::MemoryWriter;
