use std::io::Write;

use log::{trace, warn};

use crate::error::{Result, StreamError};
use crate::record::Record;
use crate::stream::{Mode, Stream};

impl<T: Write> Stream<T> {
    /// Serializes `record` as FASTQ when it has a quality string and as
    /// FASTA otherwise, wrapping sequence and quality at
    /// [`wrap_length`](Stream::wrap_length) columns.
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.expect_mode(Mode::Output)?;
        if self.is_err() {
            return Err(StreamError::Failed);
        }

        self.emit(if record.qual.is_empty() { b">" } else { b"@" }, false)?;
        self.emit(&record.name, false)?;
        if !record.comment.is_empty() {
            self.emit(b" ", false)?;
            self.emit(&record.comment, false)?;
        }
        self.emit(b"\n", false)?;
        self.emit(&record.seq, true)?;
        if !record.qual.is_empty() {
            self.emit(b"\n+\n", false)?;
            self.emit(&record.qual, true)?;
        }
        self.emit(b"\n", false)
    }

    /// Flushes the transport.
    pub fn flush(&mut self) -> Result<()> {
        self.expect_mode(Mode::Output)?;
        if self.is_err() {
            return Err(StreamError::Failed);
        }
        self.inner.flush().map_err(|e| self.write_failed(e))
    }

    /// Writes `text` in pieces of at most `wrap_length` bytes with a
    /// newline between pieces, or in one piece when `wrap` is off.
    fn emit(&mut self, text: &[u8], wrap: bool) -> Result<()> {
        let width = match self.wrap_length {
            n if wrap && n > 0 => n,
            _ => text.len().max(1),
        };
        for (i, chunk) in text.chunks(width).enumerate() {
            if i > 0 {
                self.put(b"\n")?;
            }
            self.put(chunk)?;
        }
        Ok(())
    }

    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        trace!("writing {} bytes", bytes.len());
        self.inner.write_all(bytes).map_err(|e| self.write_failed(e))
    }

    fn write_failed(&mut self, e: std::io::Error) -> StreamError {
        warn!("write failed: {e}");
        self.buffer.mark_failed();
        StreamError::Io(e)
    }
}
