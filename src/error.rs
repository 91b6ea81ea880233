// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the compression engine.
//!
//! Two layers. `RecordDefect` says what is wrong with one input line and is
//! produced by the record parser and the posting compressor, which don't know
//! where the line came from. `CompressError` is what the public API returns;
//! the driver wraps a defect with its line number as `MalformedRecord`.
//!
//! Only `MalformedRecord` is recoverable (see `MalformedPolicy`). Everything
//! else ends the run.

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = CompressError> = std::result::Result<T, E>;

/// Errors returned by the compression engine.
#[derive(Debug, Error)]
pub enum CompressError {
    /// A line did not parse into a term plus at least one increasing identifier.
    #[error("line {line}: malformed record: {defect}")]
    MalformedRecord { line: usize, defect: RecordDefect },

    /// A bit-string handed to the bit packer had the wrong length or a
    /// character other than `'0'`/`'1'`. Always an encoder bug.
    #[error("invalid bit string: {0}")]
    InvalidFormat(String),

    /// A caller-supplied value is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal bookkeeping went wrong.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Read or write failure on an input or output artifact.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl CompressError {
    /// Wrap an I/O error with a short description of what was being done.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        CompressError::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the driver may skip past this error under `MalformedPolicy::Skip`.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CompressError::MalformedRecord { .. })
    }
}

/// What is wrong with a single index record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordDefect {
    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// The line has a term but no document identifiers.
    #[error("term {0:?} has no document identifiers")]
    MissingPostings(String),

    /// A document identifier is not a non-negative integer that fits in `u32`.
    #[error("document identifier {0:?} is not a non-negative 32-bit integer")]
    BadDocId(String),

    /// The posting compressor was handed an empty identifier list.
    #[error("posting list is empty")]
    EmptyPostings,

    /// Identifiers must be strictly increasing.
    #[error("document identifiers not strictly increasing: {prev} followed by {next}")]
    NotIncreasing { prev: u32, next: u32 },

    /// The term contains a character the dictionary format reserves.
    #[error("term contains reserved marker {0:?}")]
    ReservedMarker(char),
}
