//! Buffered FASTA/FASTQ reading and writing over any [`std::io::Read`] or
//! [`std::io::Write`] transport.
//!
//! ```
//! use std::io::Cursor;
//! use seq_stream::{Record, Stream};
//!
//! let mut stream = Stream::reader(Cursor::new(&b"@r1\nAC\n+\nGG\n"[..]));
//! let mut rec = Record::default();
//! while stream.read(&mut rec)? {
//!     assert_eq!(rec.qual.len(), rec.seq.len());
//! }
//! # Ok::<(), seq_stream::StreamError>(())
//! ```

mod buffer;
mod error;
pub mod primitive;
mod reader;
mod record;
mod stream;
mod writer;

pub use buffer::{Delimiter, Stop};
pub use error::{Result, StreamError};
pub use reader::Records;
pub use record::Record;
pub use stream::{Mode, Stream, StreamConfig};
