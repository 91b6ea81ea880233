// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit packer: `'0'`/`'1'` strings to bytes, most significant bit first.
//!
//! The encoders above this build their output as text bit-strings because
//! that is the unit the format is specified in. This is the one place those
//! strings turn into bytes. Anything other than a clean multiple of eight
//! binary digits means an encoder upstream is broken, so it is reported as
//! `InvalidFormat` and never papered over.

use crate::error::{CompressError, Result};

/// Pack a bit-string into bytes.
///
/// ```
/// assert_eq!(termpack::binary::pack("1000010110000000").unwrap(), vec![0x85, 0x80]);
/// ```
pub fn pack(bits: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(bits.len() / 8);
    pack_into(bits, &mut out)?;
    Ok(out)
}

/// Pack a bit-string, appending to `out`. Returns the number of bytes added.
///
/// On error `out` is left as it was.
pub fn pack_into(bits: &str, out: &mut Vec<u8>) -> Result<usize> {
    let raw = bits.as_bytes();
    if raw.len() % 8 != 0 {
        return Err(CompressError::InvalidFormat(format!(
            "length {} is not a multiple of 8",
            raw.len()
        )));
    }

    let start = out.len();
    out.reserve(raw.len() / 8);
    for (chunk_idx, chunk) in raw.chunks_exact(8).enumerate() {
        let mut byte = 0u8;
        for (bit_idx, &c) in chunk.iter().enumerate() {
            let bit = match c {
                b'0' => 0,
                b'1' => 1,
                _ => {
                    out.truncate(start);
                    return Err(CompressError::InvalidFormat(format!(
                        "byte 0x{:02x} at position {} is not a binary digit",
                        c,
                        chunk_idx * 8 + bit_idx
                    )));
                }
            };
            byte = (byte << 1) | bit;
        }
        out.push(byte);
    }

    Ok(out.len() - start)
}
