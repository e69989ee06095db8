//! Error types for Philia operations.
//!
//! ## Error Philosophy
//!
//! Philia loads a network exactly once and treats the load as all-or-nothing:
//! - Any problem with the network file aborts the whole load; no partially
//!   populated graph is ever handed back
//! - Query errors (an out-of-range account ID) are per-call outcomes and
//!   leave the loaded graph untouched
//! - "No path between two valid accounts" is not an error at all; path
//!   queries return `Ok(None)` for that case
//!
//! ## Error Categorization
//!
//! Load failures distinguish three diagnosable conditions: the file does not
//! exist (`FileNotFound`), the file exists but could not be read (`Io`), and
//! the file was read but does not follow the network format (`EmptyFile`,
//! `InvalidFormat`).

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Philia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Philia operations.
///
/// All variants are recoverable at the caller boundary; none should take
/// the process down.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not resolve to a readable file
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// File exists but reading it failed partway
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The network file holds no data at all
    #[error("file is empty")]
    EmptyFile,

    /// The network file violates the line-oriented pair format
    #[error("invalid file format: line {line}: {reason}")]
    InvalidFormat {
        /// 1-based line number where parsing stopped.
        line: usize,
        /// What made the line unparseable.
        reason: String,
    },

    /// A query referenced an account ID outside the loaded range
    #[error("invalid account id {id}: must be between 0 and {max}", max = .accounts.saturating_sub(1))]
    InvalidId {
        /// The rejected ID.
        id: usize,
        /// Number of accounts in the loaded network.
        accounts: usize,
    },
}

impl Error {
    /// Create a format error for a specific line of the network file.
    pub(crate) fn invalid_format(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }
}
