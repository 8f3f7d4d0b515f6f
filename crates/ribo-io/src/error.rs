//! Error types for trajectory I/O

use ribo_algos::AlignError;
use thiserror::Error;

/// Errors that can occur while reading or writing trajectories
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with location information
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message
        message: String,
    },

    /// File extension not recognised as a trajectory format
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// File is empty or contains no frames
    #[error("Empty file or no frames found")]
    EmptyFile,

    /// Parsed data does not form a valid structure frame
    #[error("Invalid structure: {0}")]
    Structure(#[from] AlignError),
}

impl IoError {
    /// Create a parse error at a specific line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for trajectory I/O operations
pub type IoResult<T> = Result<T, IoError>;
