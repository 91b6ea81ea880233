// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blocked front coding for the term dictionary.
//!
//! Sorted terms share prefixes, and terms that sit next to each other share
//! the most. We cut the term stream into fixed-size blocks, find the prefix
//! common to every term in the block, and store it once:
//!
//! ```text
//! automata automate automatic automation
//! → 8automat*a1◊e2◊ic3◊ion
//!   │└──┬──┘│└ first suffix
//!   │   │   └ prefix marker
//!   │   └ shared prefix
//!   └ length of the first term
//! ```
//!
//! Every later term is `<suffix length>◊<suffix>`. Lengths count characters
//! (Unicode scalar values), and the prefix never splits one.
//!
//! A reader finds block `i` through its pointer: the byte offset in the
//! buffer where the block's text starts. Pointers are appended once per block
//! and never touched again.
//!
//! # References
//!
//! - Witten, Moffat, Bell (1999): "Managing Gigabytes", §4.1 "Front coding",
//!   and Manning, Raghavan, Schütze (2008), §5.2.2 "Blocked storage".

use std::fmt::Write as _;
use std::io::{self, Write};

use log::debug;

use crate::error::{CompressError, Result};

use super::format::{BLOCK_SEPARATOR, PREFIX_MARKER};

/// Longest prefix shared by every term in the block.
///
/// One term: the term itself. No shared first character: `""`.
pub fn common_prefix<S: AsRef<str>>(terms: &[S]) -> &str {
    let Some(first) = terms.first() else {
        return "";
    };
    let first = first.as_ref();

    let mut end = first.len();
    for term in &terms[1..] {
        let shared: usize = first[..end]
            .chars()
            .zip(term.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        end = shared;
        if end == 0 {
            break;
        }
    }
    &first[..end]
}

/// Front-code one block of sorted terms.
///
/// Empty `terms` is a caller bug: the driver never flushes an empty block.
pub fn compress_block<S: AsRef<str>>(terms: &[S]) -> Result<String> {
    let mut out = String::new();
    compress_block_into(terms, &mut out)?;
    Ok(out)
}

fn compress_block_into<S: AsRef<str>>(terms: &[S], out: &mut String) -> Result<()> {
    let Some(first) = terms.first() else {
        return Err(CompressError::InvariantViolation(
            "cannot front-code an empty block".to_string(),
        ));
    };
    let first = first.as_ref();
    let prefix = common_prefix(terms);
    let cut = prefix.len();

    // Writing into a String cannot fail.
    let _ = write!(out, "{}{}{}{}", first.chars().count(), prefix, PREFIX_MARKER, &first[cut..]);
    for term in &terms[1..] {
        let suffix = &term.as_ref()[cut..];
        let _ = write!(out, "{}{}{}", suffix.chars().count(), BLOCK_SEPARATOR, suffix);
    }
    Ok(())
}

/// Dictionary buffer plus one pointer per block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedDictionary {
    buffer: String,
    pointers: Vec<usize>,
}

impl CompressedDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Front-code a block and append it. Returns the block's pointer.
    pub fn append_block<S: AsRef<str>>(&mut self, terms: &[S]) -> Result<usize> {
        let pointer = self.buffer.len();
        compress_block_into(terms, &mut self.buffer)?;
        self.pointers.push(pointer);
        debug!(
            "block {} at offset {}: {} terms, {} bytes",
            self.pointers.len() - 1,
            pointer,
            terms.len(),
            self.buffer.len() - pointer
        );
        Ok(pointer)
    }

    /// Concatenated compressed blocks.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Byte offset of each block in `buffer()`, in block order.
    pub fn pointers(&self) -> &[usize] {
        &self.pointers
    }

    pub fn block_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Write the persisted form: the buffer verbatim, then `"\n<pointer>"`
    /// for every block. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<usize> {
        writer.write_all(self.buffer.as_bytes())?;
        let mut written = self.buffer.len();
        for pointer in &self.pointers {
            let line = format!("\n{}", pointer);
            writer.write_all(line.as_bytes())?;
            written += line.len();
        }
        Ok(written)
    }

    /// The persisted form as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.buffer.len() + self.pointers.len() * 8);
        // Vec<u8> as a writer cannot fail.
        let _ = self.write_to(&mut out);
        out
    }
}
