// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for VByte and gap-coded posting lists.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termpack::binary::{encode_entry, pack, vbyte, PostingLayout};
use termpack::testing::{decode_postings, decode_vbyte, split_posting_stream};

#[derive(Debug, Arbitrary)]
struct Input {
    value: u64,
    ids: Vec<u32>,
}

fuzz_target!(|input: Input| {
    // Every value round-trips and uses the minimal number of groups
    let bytes = pack(&vbyte::encode(input.value)).expect("encoder emits whole bytes");
    assert_eq!(bytes.len(), vbyte::group_count(input.value));
    assert_eq!(decode_vbyte(&bytes), Some((input.value, bytes.len())));

    // Arbitrary id lists are either rejected or round-trip
    let mut out = Vec::new();
    match encode_entry(&input.ids, PostingLayout::LengthPrefixed, &mut out) {
        Ok(stats) => {
            assert_eq!(stats.written_len, out.len());
            let entries = split_posting_stream(&out, PostingLayout::LengthPrefixed)
                .expect("length prefix frames the payload");
            assert_eq!(entries.len(), 1);
            assert_eq!(decode_postings(entries[0]).as_deref(), Some(input.ids.as_slice()));
        }
        Err(e) => {
            assert!(e.is_recoverable(), "bad id lists are record defects: {e}");
            assert!(out.is_empty());
        }
    }
});
