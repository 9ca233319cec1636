//! In-memory sink for capturing rendered output

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable byte sink backed by a shared buffer
///
/// Every clone writes into the same buffer, so one handle can be given to a
/// logger while another reads back what was written.
///
/// ```
/// use rust_field_logger::{LogLevel, Logger, MemoryWriter};
///
/// let sink = MemoryWriter::new();
/// let logger = Logger::new(sink.clone(), "", LogLevel::Info);
/// logger.set_colored(false);
/// logger.info("ready");
///
/// assert!(sink.contents().contains("ready"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
