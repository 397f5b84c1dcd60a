use std::io;
use thiserror::Error;

use crate::stream::Mode;

/// Errors from reading or writing records.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("stream is unusable after an earlier error")]
    Failed,

    #[error("truncated quality string: sequence has {seq_len} bytes, quality has {qual_len}")]
    TruncatedQuality { seq_len: usize, qual_len: usize },

    #[error("input ended inside a record header")]
    TruncatedHeader,

    #[error("stream opened for {actual:?}, operation needs {expected:?}")]
    WrongMode { expected: Mode, actual: Mode },
}

pub type Result<T> = std::result::Result<T, StreamError>;
