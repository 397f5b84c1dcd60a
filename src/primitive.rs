//! Adapters for transports exposed as a handle plus a raw transfer function.
//!
//! The function follows the classic C convention: it returns the number of
//! bytes moved, `0` at end of input (or for a failed write), and a negative
//! value on error.

use std::io::{self, Read, Write};

/// [`Read`] over `func(&mut handle, buf) -> isize`.
pub struct RawSource<H, F> {
    handle: H,
    func: F,
}

impl<H, F> RawSource<H, F>
where
    F: FnMut(&mut H, &mut [u8]) -> isize,
{
    /// Pairs a handle with its transfer function.
    pub fn new(handle: H, func: F) -> Self {
        Self { handle, func }
    }

    /// Returns the wrapped handle.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

impl<H, F> Read for RawSource<H, F>
where
    F: FnMut(&mut H, &mut [u8]) -> isize,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = (self.func)(&mut self.handle, buf);
        if n < 0 {
            return Err(io::Error::other(format!("read primitive returned {n}")));
        }
        Ok((n as usize).min(buf.len()))
    }
}

/// [`Write`] over `func(&mut handle, bytes) -> isize`.
pub struct RawSink<H, F> {
    handle: H,
    func: F,
}

impl<H, F> RawSink<H, F>
where
    F: FnMut(&mut H, &[u8]) -> isize,
{
    /// Pairs a handle with its transfer function.
    pub fn new(handle: H, func: F) -> Self {
        Self { handle, func }
    }

    /// Returns the wrapped handle.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

impl<H, F> Write for RawSink<H, F>
where
    F: FnMut(&mut H, &[u8]) -> isize,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = (self.func)(&mut self.handle, buf);
        if n < 0 {
            return Err(io::Error::other(format!("write primitive returned {n}")));
        }
        // Zero surfaces as `WriteZero` through `write_all`.
        Ok((n as usize).min(buf.len()))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_slice(handle: &mut &'static [u8], buf: &mut [u8]) -> isize {
        let n = handle.len().min(buf.len());
        buf[..n].copy_from_slice(&handle[..n]);
        *handle = &handle[n..];
        n as isize
    }

    #[test]
    fn test_source_reads_until_zero() {
        let mut src = RawSource::new(&b"hello"[..], read_slice);
        let mut buf = [0u8; 3];

        assert_eq!(src.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(src.read(&mut buf).unwrap(), 2);
        assert_eq!(src.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_source_negative_is_error() {
        let mut src = RawSource::new((), |_: &mut (), _: &mut [u8]| -1);
        let mut buf = [0u8; 4];

        assert!(src.read(&mut buf).is_err());
    }

    #[test]
    fn test_sink_collects_into_handle() {
        let mut sink = RawSink::new(Vec::new(), |out: &mut Vec<u8>, bytes: &[u8]| {
            out.extend_from_slice(bytes);
            bytes.len() as isize
        });
        sink.write_all(b"ACGT").unwrap();

        assert_eq!(sink.into_handle(), b"ACGT");
    }

    #[test]
    fn test_sink_zero_is_write_zero() {
        let mut sink = RawSink::new((), |_: &mut (), _: &[u8]| 0);
        let err = sink.write_all(b"A").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }
}
