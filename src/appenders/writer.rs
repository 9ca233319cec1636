//! Prefix-bound adapter over an arbitrary byte sink

use crate::core::Result;
use std::fmt;
use std::io::Write;

/// Writes one rendered line per call to the wrapped sink
///
/// Each line is emitted as `prefix + line + '\n'` through a single
/// `write_all`, then the sink is flushed, so nothing is held back between
/// calls.
pub struct WriterAppender {
    prefix: String,
    writer: Box<dyn Write + Send>,
}

impl WriterAppender {
    pub fn new<W>(writer: W, prefix: impl Into<String>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            prefix: prefix.into(),
            writer: Box::new(writer),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn append(&mut self, line: &str) -> Result<()> {
        let mut output = String::with_capacity(self.prefix.len() + line.len() + 1);
        output.push_str(&self.prefix);
        output.push_str(line);
        output.push('\n');

        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for WriterAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterAppender")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
