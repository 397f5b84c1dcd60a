use std::io::{self, ErrorKind, Read};

use log::{debug, trace, warn};
use memchr::memchr;

pub(crate) const DEFAULT_BUFFER_SIZE: usize = 16 * 1024;

/// Byte classes that end a [`read_until`](crate::Stream::read_until) scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Any of `' '`, `\t`, `\n`, `\v`, `\f`, `\r`.
    Space,
    /// Whitespace other than `' '`.
    Tab,
    /// `\n`; a `\r` right before it is dropped from the output.
    Line,
    /// One specific byte.
    Byte(u8),
}

impl Delimiter {
    fn find(self, window: &[u8]) -> Option<usize> {
        match self {
            Delimiter::Line => memchr(b'\n', window),
            Delimiter::Byte(b) => memchr(b, window),
            Delimiter::Space => window.iter().position(|&b| is_space(b)),
            Delimiter::Tab => window.iter().position(|&b| is_space(b) && b != b' '),
        }
    }
}

/// How a successful scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The delimiter byte that was found and consumed.
    Delimiter(u8),
    /// Input ended after at least one byte was collected.
    Eof,
}

#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Fixed-capacity window over a byte transport.
///
/// `data[begin..end]` holds the unread bytes. The window is refilled from
/// offset 0 only once it is fully drained.
#[derive(Debug)]
pub(crate) struct ReadBuffer {
    data: Vec<u8>,
    capacity: usize,
    begin: usize,
    end: usize,
    is_eof: bool,
    is_err: bool,
    error: Option<io::Error>,
}

impl ReadBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity: capacity.max(1),
            begin: 0,
            end: 0,
            is_eof: false,
            is_err: false,
            error: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_err(&self) -> bool {
        self.is_err
    }

    /// End of input was reported and every buffered byte is consumed.
    pub(crate) fn is_eof(&self) -> bool {
        self.is_eof && self.begin >= self.end
    }

    /// Hands out the stored I/O error once; later calls see `None`.
    pub(crate) fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Puts the buffer into the sticky error state without a stored error.
    pub(crate) fn mark_failed(&mut self) {
        self.is_err = true;
    }

    pub(crate) fn reset(&mut self) {
        self.begin = 0;
        self.end = 0;
        self.is_eof = false;
        self.is_err = false;
        self.error = None;
    }

    fn fill<R: Read>(&mut self, src: &mut R) -> bool {
        if self.begin < self.end {
            return true;
        }
        if self.is_err || self.is_eof {
            return false;
        }
        if self.data.len() != self.capacity {
            self.data.resize(self.capacity, 0);
        }
        self.begin = 0;
        self.end = 0;
        loop {
            match src.read(&mut self.data) {
                Ok(0) => {
                    debug!("end of input");
                    self.is_eof = true;
                    return false;
                }
                Ok(n) => {
                    trace!("refilled {n} bytes");
                    self.end = n.min(self.data.len());
                    return true;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("read failed: {e}");
                    self.is_eof = true;
                    self.is_err = true;
                    self.error = Some(e);
                    return false;
                }
            }
        }
    }

    pub(crate) fn next_byte<R: Read>(&mut self, src: &mut R) -> Option<u8> {
        if !self.fill(src) {
            return None;
        }
        let b = self.data[self.begin];
        self.begin += 1;
        Some(b)
    }

    pub(crate) fn read_until<R: Read>(
        &mut self,
        src: &mut R,
        delimiter: Delimiter,
        out: &mut Vec<u8>,
        append: bool,
    ) -> Option<Stop> {
        if !append {
            out.clear();
        }
        let mut got_any = false;
        let found = loop {
            if !self.fill(src) {
                break None;
            }
            got_any = true;
            let window = &self.data[self.begin..self.end];
            match delimiter.find(window) {
                Some(pos) => {
                    out.extend_from_slice(&window[..pos]);
                    let d = window[pos];
                    self.begin += pos + 1;
                    break Some(d);
                }
                None => {
                    out.extend_from_slice(window);
                    self.begin = self.end;
                }
            }
        };

        if self.is_err || (found.is_none() && !got_any) {
            return None;
        }
        if delimiter == Delimiter::Line && out.last() == Some(&b'\r') {
            out.pop();
        }
        Some(found.map_or(Stop::Eof, Stop::Delimiter))
    }
}
