//! Strict UTF-8 file reading
//!
//! Token counts are only meaningful for text, so reads fail on invalid UTF-8
//! instead of substituting replacement characters. I/O and decode failures
//! collapse into one error type; callers report both the same way.

use std::fs;
use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;

/// A per-file read failure
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
