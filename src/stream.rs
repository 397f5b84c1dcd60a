use std::io::Read;

use crate::buffer::{DEFAULT_BUFFER_SIZE, Delimiter, ReadBuffer, Stop};
use crate::error::{Result, StreamError};

pub(crate) const DEFAULT_WRAP_LENGTH: usize = 60;

/// Direction a [`Stream`] moves records in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Input,
    Output,
}

/// Construction-time settings for a [`Stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Read buffer size in bytes. Clamped to at least 1.
    pub capacity: usize,
    pub mode: Mode,
    /// Output line width for sequence and quality; 0 disables wrapping.
    pub wrap_length: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUFFER_SIZE,
            mode: Mode::Input,
            wrap_length: DEFAULT_WRAP_LENGTH,
        }
    }
}

impl StreamConfig {
    /// Sets the read buffer size.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the stream direction.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output line width.
    pub fn wrap_length(mut self, wrap_length: usize) -> Self {
        self.wrap_length = wrap_length;
        self
    }
}

/// Buffered FASTA/FASTQ record stream over a byte transport.
///
/// In [`Mode::Input`] the transport must implement [`std::io::Read`] and
/// records are pulled with [`read`](Stream::read). In [`Mode::Output`] it
/// must implement [`std::io::Write`] and records are pushed with
/// [`write`](Stream::write).
///
/// Failures are sticky: after an I/O error or a truncated quality string
/// [`is_usable`](Stream::is_usable) stays false until [`rewind`](Stream::rewind).
#[derive(Debug)]
pub struct Stream<T> {
    pub(crate) inner: T,
    pub(crate) buffer: ReadBuffer,
    pub(crate) mode: Mode,
    pub(crate) wrap_length: usize,
    /// Last record's quality string was missing or of the wrong length.
    pub(crate) truncated_quality: bool,
    /// The next record's header byte has already been consumed.
    pub(crate) is_ready: bool,
    /// The most recent record parse completed.
    pub(crate) last_ok: bool,
}

impl<T> Stream<T> {
    /// Creates a stream from explicit settings.
    pub fn with_config(config: StreamConfig, inner: T) -> Self {
        Self {
            inner,
            buffer: ReadBuffer::with_capacity(config.capacity),
            mode: config.mode,
            wrap_length: config.wrap_length,
            truncated_quality: false,
            is_ready: false,
            last_ok: false,
        }
    }

    /// Creates a stream with default 16 KiB buffer and 60-column wrapping.
    pub fn new(inner: T, mode: Mode) -> Self {
        Self::with_config(StreamConfig::default().mode(mode), inner)
    }

    /// Creates a stream with specified buffer capacity.
    pub fn with_capacity(capacity: usize, inner: T, mode: Mode) -> Self {
        Self::with_config(StreamConfig::default().capacity(capacity).mode(mode), inner)
    }

    /// Input stream with the default 16 KiB buffer.
    pub fn reader(inner: T) -> Self {
        Self::new(inner, Mode::Input)
    }

    /// Output stream wrapping at 60 columns.
    pub fn writer(inner: T) -> Self {
        Self::new(inner, Mode::Output)
    }

    /// Returns the stream direction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the read buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the output line width; 0 means no wrapping.
    pub fn wrap_length(&self) -> usize {
        self.wrap_length
    }

    /// Changes the output line width for later writes.
    pub fn set_wrap_length(&mut self, wrap_length: usize) {
        self.wrap_length = wrap_length;
    }

    /// The transport reported an I/O error.
    pub fn is_err(&self) -> bool {
        self.buffer.is_err()
    }

    /// The transport reported end of input and the buffer is drained.
    pub fn is_eof(&self) -> bool {
        self.buffer.is_eof()
    }

    /// A FASTQ quality string was missing or did not match its sequence length.
    pub fn truncated_quality(&self) -> bool {
        self.truncated_quality
    }

    /// Opposite of [`is_usable`](Stream::is_usable).
    pub fn is_fail(&self) -> bool {
        self.is_err() || self.truncated_quality || (self.is_eof() && !self.last_ok)
    }

    /// False once the stream has failed or hit end of input with no record
    /// in progress. Callers stop consuming at that point.
    pub fn is_usable(&self) -> bool {
        !self.is_fail()
    }

    /// Drops buffered bytes and clears every status flag. The transport
    /// itself is not repositioned.
    pub fn rewind(&mut self) {
        self.buffer.reset();
        self.truncated_quality = false;
        self.is_ready = false;
        self.last_ok = false;
    }

    /// Returns a reference to the transport.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the stream, returning the transport. Buffered input is lost.
    pub fn into_inner(self) -> T {
        self.inner
    }

    pub(crate) fn expect_mode(&self, expected: Mode) -> Result<()> {
        if self.mode != expected {
            return Err(StreamError::WrongMode {
                expected,
                actual: self.mode,
            });
        }
        Ok(())
    }

    /// Error to report for a transport failure seen during this call.
    pub(crate) fn io_failure(&mut self) -> StreamError {
        self.buffer
            .take_error()
            .map_or(StreamError::Failed, StreamError::Io)
    }
}

impl<T: Read> Stream<T> {
    /// Next unread byte, refilling the buffer when it is drained.
    ///
    /// `None` means end of input or an I/O error; check [`is_err`](Stream::is_err).
    pub fn next_byte(&mut self) -> Option<u8> {
        self.buffer.next_byte(&mut self.inner)
    }

    /// Collects bytes into `out` up to the next `delimiter`, clearing `out`
    /// first unless `append` is set. The delimiter is consumed but not
    /// stored.
    ///
    /// Returns `None` on I/O error, or when input ended before any byte
    /// was seen. Input ending after some bytes is a successful
    /// [`Stop::Eof`].
    pub fn read_until(
        &mut self,
        delimiter: Delimiter,
        out: &mut Vec<u8>,
        append: bool,
    ) -> Option<Stop> {
        self.buffer.read_until(&mut self.inner, delimiter, out, append)
    }
}
