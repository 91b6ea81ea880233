// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variable-byte encoder producing bit-strings.
//!
//! Big-endian cousin of LEB128: the value's binary digits are cut into 7-bit
//! groups from the low end, the top group is zero-padded, and the groups are
//! written most significant first. Each group gets a flag bit in front, `0`
//! for "more follows" and `1` for "this is the last one". So the terminal
//! byte is the one with the high bit *set*, the reverse of protobuf varints.
//!
//! ```text
//! 5      → 101            → [0000101]            → 10000101
//! 16256  → 11111110000000 → [1111111][0000000]   → 01111111 10000000
//! 0      →                → [0000000]            → 10000000
//! ```
//!
//! # References
//!
//! - Manning, Raghavan, Schütze (2008): "Introduction to Information
//!   Retrieval", §5.3.1 "Variable byte codes".

use crate::error::{CompressError, Result};

use super::format::{FLAG_CONTINUE, FLAG_LAST, GROUP_BITS};

/// Number of 7-bit groups needed for `value` (at least one).
#[inline]
pub fn group_count(value: u64) -> usize {
    let bit_len = (u64::BITS - value.leading_zeros()) as usize;
    bit_len.div_ceil(GROUP_BITS).max(1)
}

/// Encode a value as a VByte bit-string.
pub fn encode(value: u64) -> String {
    let mut out = String::with_capacity(group_count(value) * 8);
    encode_into(value, &mut out);
    out
}

/// Encode a value, appending the bit-string to `out`.
pub fn encode_into(value: u64, out: &mut String) {
    let groups = group_count(value);
    for g in (0..groups).rev() {
        out.push(if g == 0 { FLAG_LAST } else { FLAG_CONTINUE });
        let group = (value >> (g * GROUP_BITS)) & 0x7F;
        for bit in (0..GROUP_BITS).rev() {
            out.push(if (group >> bit) & 1 == 1 { '1' } else { '0' });
        }
    }
}

/// Encode a signed value, rejecting negatives.
///
/// Gaps are unsigned by construction in this crate; this exists for callers
/// that compute them in signed arithmetic.
pub fn encode_signed(value: i64) -> Result<String> {
    let value = u64::try_from(value).map_err(|_| {
        CompressError::InvalidArgument(format!("cannot VByte-encode negative value {}", value))
    })?;
    Ok(encode(value))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;
    use crate::binary::format::MAX_VBYTE_GROUPS;

    /// Group count is bounded and the encoded string is whole bytes.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_encode_shape() {
        let value: u64 = kani::any();
        let groups = group_count(value);
        kani::assert(groups >= 1, "at least one group");
        kani::assert(groups <= MAX_VBYTE_GROUPS, "at most MAX_VBYTE_GROUPS groups");
    }
}
