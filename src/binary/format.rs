// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk format constants shared by the encoders and the driver.
//!
//! Everything that a reader of the two artifacts would need to agree on lives
//! here: the dictionary markers, the posting delimiter, the VByte group width,
//! and the file naming scheme. If you change one of these, you changed the
//! format.

use serde::{Deserialize, Serialize};

// ============================================================================
// DICTIONARY
// ============================================================================

/// Separates the shared prefix from the first term's suffix: `8automat*a`.
pub const PREFIX_MARKER: char = '*';

/// Separates a suffix length from the suffix for every later term: `2◊ic`.
pub const BLOCK_SEPARATOR: char = '◊';

/// Characters a term may not contain (the front coder would be ambiguous).
pub const RESERVED_TERM_CHARS: [char; 2] = [PREFIX_MARKER, BLOCK_SEPARATOR];

/// Terms per dictionary block when nothing else is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Smallest block size that still shares a prefix between terms.
pub const MIN_BLOCK_SIZE: usize = 2;

// ============================================================================
// POSTINGS
// ============================================================================

/// Payload bits per VByte group.
pub const GROUP_BITS: usize = 7;

/// Flag bit in front of every group except the last.
pub const FLAG_CONTINUE: char = '0';

/// Flag bit in front of the last group.
pub const FLAG_LAST: char = '1';

/// Widest VByte code for a `u64` (ceil(64 / 7) groups).
pub const MAX_VBYTE_GROUPS: usize = 10;

/// Byte written after each posting entry in the delimited layout.
pub const POSTING_DELIMITER: u8 = b'\n';

/// How posting entries are framed in the posting file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostingLayout {
    /// Payload followed by `0x0A`. A payload may itself contain `0x0A`, which
    /// a reader cannot tell apart from the delimiter.
    #[default]
    Delimited,
    /// Packed VByte code of the payload length, then the payload.
    LengthPrefixed,
}

// ============================================================================
// FILE NAMES
// ============================================================================

/// Basename shared by both artifacts when nothing else is configured.
pub const DEFAULT_BASENAME: &str = "CompressedIndex";

/// Appended to the basename for the dictionary artifact.
pub const DICTIONARY_FILE_SUFFIX: &str = "Dictionary.txt";

/// Appended to the basename for the posting artifact.
pub const POSTING_FILE_SUFFIX: &str = "Posting.bin";

/// Dictionary artifact name for a basename.
pub fn dictionary_file_name(basename: &str) -> String {
    format!("{basename}{DICTIONARY_FILE_SUFFIX}")
}

/// Posting artifact name for a basename.
pub fn posting_file_name(basename: &str) -> String {
    format!("{basename}{POSTING_FILE_SUFFIX}")
}
