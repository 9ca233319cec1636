//! Sink adapters

pub mod memory;
pub mod writer;

pub use memory::MemoryWriter;
pub use writer::WriterAppender;
