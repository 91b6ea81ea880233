//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds
//! reference decoders for both artifacts so round-trip properties can be
//! checked without shipping a query-time reader.

#![doc(hidden)]

use crate::binary::{PostingLayout, BLOCK_SEPARATOR, POSTING_DELIMITER, PREFIX_MARKER};

/// Bytes back to a `'0'`/`'1'` string.
pub fn unpack(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:08b}", b)).collect()
}

/// Decode one VByte code from the front of `bytes`: `(value, bytes consumed)`.
///
/// `None` if the input ends before a terminal group or overflows `u64`.
pub fn decode_vbyte(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        value = value.checked_mul(128)? | u64::from(byte & 0x7F);
        if byte & 0x80 != 0 {
            return Some((value, i + 1));
        }
    }
    None
}

/// Decode a packed gap code back into document identifiers.
pub fn decode_postings(mut payload: &[u8]) -> Option<Vec<u32>> {
    let mut ids = Vec::new();
    let mut current: u64 = 0;
    while !payload.is_empty() {
        let (gap, used) = decode_vbyte(payload)?;
        current = current.checked_add(gap)?;
        ids.push(u32::try_from(current).ok()?);
        payload = &payload[used..];
    }
    Some(ids)
}

/// Split a posting file into per-term payloads.
///
/// For the delimited layout this splits on every delimiter byte, which is
/// only correct when no payload contains one.
pub fn split_posting_stream(bytes: &[u8], layout: PostingLayout) -> Option<Vec<&[u8]>> {
    match layout {
        PostingLayout::Delimited => {
            if bytes.is_empty() {
                return Some(Vec::new());
            }
            let body = bytes.strip_suffix(&[POSTING_DELIMITER])?;
            Some(body.split(|&b| b == POSTING_DELIMITER).collect())
        }
        PostingLayout::LengthPrefixed => {
            let mut out = Vec::new();
            let mut rest = bytes;
            while !rest.is_empty() {
                let (len, used) = decode_vbyte(rest)?;
                let end = used.checked_add(usize::try_from(len).ok()?)?;
                out.push(rest.get(used..end)?);
                rest = &rest[end..];
            }
            Some(out)
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

/// Decode one front-coded block back into its terms.
///
/// Assumes the shared prefix does not start with a digit; the format cannot
/// tell those digits apart from the first term's length.
pub fn decode_block(text: &str) -> Option<Vec<String>> {
    let mut chars = text.chars().peekable();

    let first_len = take_number(&mut chars)?;
    let mut prefix = String::new();
    loop {
        let c = chars.next()?;
        if c == PREFIX_MARKER {
            break;
        }
        prefix.push(c);
    }
    let prefix_len = prefix.chars().count();
    let first_suffix: String = chars.by_ref().take(first_len.checked_sub(prefix_len)?).collect();
    if first_suffix.chars().count() + prefix_len != first_len {
        return None;
    }

    let mut terms = vec![format!("{prefix}{first_suffix}")];
    while chars.peek().is_some() {
        let suffix_len = take_number(&mut chars)?;
        if chars.next()? != BLOCK_SEPARATOR {
            return None;
        }
        let suffix: String = chars.by_ref().take(suffix_len).collect();
        if suffix.chars().count() != suffix_len {
            return None;
        }
        terms.push(format!("{prefix}{suffix}"));
    }
    Some(terms)
}

/// Split a persisted dictionary into its block buffer and pointers.
pub fn split_dictionary_file(text: &str) -> Option<(&str, Vec<usize>)> {
    let mut lines = text.split('\n');
    let buffer = lines.next()?;
    let pointers = lines.map(|l| l.parse().ok()).collect::<Option<Vec<usize>>>()?;
    Some((buffer, pointers))
}

/// Decode every block of a persisted dictionary, in order.
pub fn decode_dictionary(text: &str) -> Option<Vec<String>> {
    let (buffer, pointers) = split_dictionary_file(text)?;
    let mut terms = Vec::new();
    for (i, &start) in pointers.iter().enumerate() {
        let end = pointers.get(i + 1).copied().unwrap_or(buffer.len());
        terms.extend(decode_block(buffer.get(start..end)?)?);
    }
    Some(terms)
}

/// Sorted, distinct `[a-z]` terms for tests that need many of them
/// (up to 26^4).
pub fn make_terms(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut letters = [b'a'; 4];
            let mut n = i;
            for slot in letters.iter_mut().rev() {
                *slot = b'a' + (n % 26) as u8;
                n /= 26;
            }
            let tail: String = letters.iter().map(|&b| b as char).collect();
            format!("t{tail}")
        })
        .collect()
}
