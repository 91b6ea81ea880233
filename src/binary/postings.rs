// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Posting list compression: gap encoding over VByte.
//!
//! For each term, which documents contain it? Doc ids cluster, so we store the
//! gaps between them instead of the ids. If documents 100, 102, 105, 110 all
//! contain "rust", the gaps are [100, 2, 3, 5]. The first gap is taken from an
//! implicit 0, which keeps the loop uniform at the cost of a wider first code
//! for large leading ids.
//!
//! # References
//!
//! - **Delta Encoding for Postings**: Zobel & Moffat (2006): "Inverted Files
//!   for Text Search Engines", ACM Computing Surveys.

use crate::error::{CompressError, RecordDefect, Result};

use super::bits::pack_into;
use super::format::{PostingLayout, POSTING_DELIMITER};
use super::vbyte;

/// Gaps between consecutive ids, starting from an implicit 0.
pub fn gaps(ids: &[u32]) -> Result<Vec<u64>, RecordDefect> {
    if ids.is_empty() {
        return Err(RecordDefect::EmptyPostings);
    }

    let mut out = Vec::with_capacity(ids.len());
    out.push(u64::from(ids[0]));
    for pair in ids.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next <= prev {
            return Err(RecordDefect::NotIncreasing { prev, next });
        }
        out.push(u64::from(next - prev));
    }
    Ok(out)
}

/// Compress one posting list into a VByte bit-string (not yet packed).
///
/// ```
/// use termpack::binary::compress_postings;
///
/// assert_eq!(compress_postings(&[5]).unwrap(), "10000101");
/// assert_eq!(compress_postings(&[5, 6]).unwrap(), "1000010110000001");
/// ```
pub fn compress(ids: &[u32]) -> Result<String, RecordDefect> {
    let gaps = gaps(ids)?;
    let width: usize = gaps.iter().map(|&g| vbyte::group_count(g) * 8).sum();
    let mut bits = String::with_capacity(width);
    for gap in gaps {
        vbyte::encode_into(gap, &mut bits);
    }
    Ok(bits)
}

/// What `encode_entry` wrote for one posting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStats {
    /// Packed gap-code bytes, excluding framing.
    pub payload_len: usize,
    /// Total bytes appended, including framing.
    pub written_len: usize,
    /// The payload contains `POSTING_DELIMITER`. Only ambiguous for the
    /// delimited layout.
    pub delimiter_collision: bool,
}

/// Compress, pack and frame one posting list, appending to `out`.
///
/// A precondition failure comes back as `MalformedRecord` with line 0. The
/// driver only passes lists that `IndexRecord::parse` accepted, so it never
/// sees this error.
pub fn encode_entry(ids: &[u32], layout: PostingLayout, out: &mut Vec<u8>) -> Result<EntryStats> {
    let bits = compress(ids).map_err(|defect| CompressError::MalformedRecord { line: 0, defect })?;

    let mut payload = Vec::with_capacity(bits.len() / 8);
    pack_into(&bits, &mut payload)?;
    let delimiter_collision = payload.contains(&POSTING_DELIMITER);

    let start = out.len();
    match layout {
        PostingLayout::Delimited => {
            out.extend_from_slice(&payload);
            out.push(POSTING_DELIMITER);
        }
        PostingLayout::LengthPrefixed => {
            pack_into(&vbyte::encode(payload.len() as u64), out)?;
            out.extend_from_slice(&payload);
        }
    }

    Ok(EntryStats {
        payload_len: payload.len(),
        written_len: out.len() - start,
        delimiter_collision,
    })
}
