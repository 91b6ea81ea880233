// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for front-coded dictionary blocks.
//!
//! Builds a sorted block from arbitrary strings and checks that it decodes
//! back. Terms with reserved markers or newlines never reach the dictionary
//! (the record parser rejects or splits them), so they are dropped here. So
//! are blocks whose prefix starts with a digit, which a reader cannot tell
//! apart from the leading length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termpack::binary::{CompressedDictionary, RESERVED_TERM_CHARS};
use termpack::testing::{decode_block, decode_dictionary};
use termpack::{common_prefix, compress_block};

fuzz_target!(|terms: Vec<String>| {
    let mut block: Vec<String> = terms
        .into_iter()
        .filter(|t| !t.is_empty() && !t.contains(RESERVED_TERM_CHARS) && !t.contains('\n'))
        .take(16)
        .collect();
    block.sort();
    block.dedup();
    if block.is_empty() {
        return;
    }

    let prefix = common_prefix(&block);
    assert!(block.iter().all(|t| t.starts_with(prefix)));
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        return;
    }

    let encoded = compress_block(&block).expect("non-empty block encodes");
    assert_eq!(decode_block(&encoded).as_deref(), Some(block.as_slice()));

    let mut dictionary = CompressedDictionary::new();
    dictionary.append_block(&block).expect("non-empty block encodes");
    let text = String::from_utf8(dictionary.to_bytes()).expect("dictionary is UTF-8");
    assert_eq!(decode_dictionary(&text).as_deref(), Some(block.as_slice()));
});
