// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bit packer.
//!
//! Arbitrary text must either pack cleanly or come back as `InvalidFormat`,
//! and a failed `pack_into` must leave the output buffer untouched.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termpack::binary::pack_into;
use termpack::testing::unpack;
use termpack::CompressError;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut out = vec![0xAA];
    match pack_into(text, &mut out) {
        Ok(added) => {
            assert_eq!(added, text.len() / 8);
            assert_eq!(out[0], 0xAA);
            // Valid input round-trips exactly
            assert_eq!(unpack(&out[1..]), text);
        }
        Err(CompressError::InvalidFormat(_)) => {
            assert_eq!(out, vec![0xAA], "failed pack must not leave partial output");
        }
        Err(other) => panic!("unexpected error kind: {other:?}"),
    }
});
