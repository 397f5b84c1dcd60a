use std::io::Read;

use log::warn;

use crate::buffer::{Delimiter, Stop};
use crate::error::{Result, StreamError};
use crate::record::Record;
use crate::stream::{Mode, Stream};

impl<T: Read> Stream<T> {
    /// Parses the next FASTA or FASTQ record into `record`.
    ///
    /// Returns `Ok(true)` when a record was read and `Ok(false)` at a clean
    /// end of input. On error `record` keeps whatever was parsed so far; a
    /// [`StreamError::TruncatedQuality`] record has its full name, comment
    /// and sequence plus the partial quality string.
    pub fn read(&mut self, record: &mut Record) -> Result<bool> {
        self.expect_mode(Mode::Input)?;
        if self.is_err() || self.truncated_quality {
            return Err(StreamError::Failed);
        }
        self.last_ok = false;

        if !self.is_ready {
            loop {
                match self.next_byte() {
                    Some(b'>' | b'@') => break,
                    Some(_) => continue,
                    None if self.is_err() => return Err(self.io_failure()),
                    None => return Ok(false),
                }
            }
        }
        self.is_ready = false;

        record.clear();
        let stop = match self.read_until(Delimiter::Space, &mut record.name, false) {
            Some(stop) => stop,
            None if self.is_err() => return Err(self.io_failure()),
            None => return Err(StreamError::TruncatedHeader),
        };
        if let Stop::Delimiter(d) = stop {
            if d != b'\n' {
                self.read_until(Delimiter::Line, &mut record.comment, false);
            }
        }

        let mut marker = None;
        while let Some(c) = self.next_byte() {
            match c {
                b'>' | b'@' | b'+' => {
                    marker = Some(c);
                    break;
                }
                b'\n' => continue,
                _ => {
                    record.seq.push(c);
                    self.read_until(Delimiter::Line, &mut record.seq, true);
                }
            }
        }
        if self.is_err() {
            return Err(self.io_failure());
        }

        self.last_ok = true;
        self.is_ready = matches!(marker, Some(b'>' | b'@'));
        if marker != Some(b'+') {
            return Ok(true);
        }

        while let Some(c) = self.next_byte() {
            if c == b'\n' {
                break;
            }
        }
        if self.is_err() {
            self.last_ok = false;
            return Err(self.io_failure());
        }
        if self.is_eof() {
            return Err(self.flag_truncated(record));
        }

        loop {
            let line = self.read_until(Delimiter::Line, &mut record.qual, true);
            if line.is_none() || record.qual.len() >= record.seq.len() {
                break;
            }
        }
        if self.is_err() {
            self.last_ok = false;
            return Err(self.io_failure());
        }
        if record.qual.len() != record.seq.len() {
            return Err(self.flag_truncated(record));
        }
        Ok(true)
    }

    /// Iterator over the remaining records. Stops after the first error;
    /// the record being parsed when it happened stays available through
    /// [`Records::partial`].
    pub fn records(&mut self) -> Records<'_, T> {
        Records {
            stream: self,
            done: false,
            partial: None,
        }
    }

    fn flag_truncated(&mut self, record: &Record) -> StreamError {
        warn!(
            "record {:?}: quality length {} does not match sequence length {}",
            String::from_utf8_lossy(&record.name),
            record.qual.len(),
            record.seq.len()
        );
        self.truncated_quality = true;
        StreamError::TruncatedQuality {
            seq_len: record.seq.len(),
            qual_len: record.qual.len(),
        }
    }
}

/// Owned records pulled from a [`Stream`], see [`Stream::records`].
pub struct Records<'a, T> {
    stream: &'a mut Stream<T>,
    done: bool,
    partial: Option<Record>,
}

impl<T> Records<'_, T> {
    /// Fields parsed before the error the iterator stopped on, if any.
    pub fn partial(&self) -> Option<&Record> {
        self.partial.as_ref()
    }
}

impl<T: Read> Iterator for Records<'_, T> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut record = Record::default();
        match self.stream.read(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                self.partial = Some(record);
                Some(Err(e))
            }
        }
    }
}
