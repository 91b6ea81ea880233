// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Encoders for the two termpack artifacts.
//!
//! The dictionary is text: blocks of front-coded terms followed by one
//! pointer per block. The postings are bytes: one gap-coded, VByte-packed
//! entry per term, in the order the terms arrived.
//!
//! ```text
//! <basename>Dictionary.txt
//! ┌────────────────────────────────────────────────────────────┐
//! │ block 0: 8automat*a1◊e2◊ic3◊ion                            │
//! │ block 1: ...                                               │
//! ├────────────────────────────────────────────────────────────┤
//! │ \n<pointer 0>\n<pointer 1>...   (byte offsets, no final \n)│
//! └────────────────────────────────────────────────────────────┘
//!
//! <basename>Posting.bin   (delimited layout)
//! ┌────────────────────────────────────────────────────────────┐
//! │ VB(p0) VB(p1-p0) ... 0x0A    term 0                        │
//! │ VB(p0) VB(p1-p0) ... 0x0A    term 1                        │
//! │ ...                                                        │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layering, leaves first: `bits` packs `'0'`/`'1'` strings into bytes,
//! `vbyte` produces those strings for one integer, `postings` strings the
//! gaps of a list together. `dictionary` stands on its own.

// Submodules
mod bits;
mod dictionary;
mod format;
mod postings;
pub mod vbyte;

pub use bits::{pack, pack_into};
pub use dictionary::{common_prefix, compress_block, CompressedDictionary};
pub use format::{
    dictionary_file_name, posting_file_name, PostingLayout, BLOCK_SEPARATOR, DEFAULT_BASENAME,
    DEFAULT_BLOCK_SIZE, DICTIONARY_FILE_SUFFIX, FLAG_CONTINUE, FLAG_LAST, GROUP_BITS,
    MAX_VBYTE_GROUPS, MIN_BLOCK_SIZE, POSTING_DELIMITER, POSTING_FILE_SUFFIX, PREFIX_MARKER,
    RESERVED_TERM_CHARS,
};
pub use postings::{compress as compress_postings, encode_entry, gaps, EntryStats};
