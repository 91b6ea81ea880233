// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch posting encoding.
//!
//! Each record's posting list is compressed independently of every other, so
//! a batch of records is embarrassingly parallel. With the `parallel` feature
//! the batch goes through rayon; without it, a plain iterator. Both collect
//! into a `Vec` in input order, so the posting file is byte-identical either
//! way. The dictionary side stays on the driver thread: blocks depend on the
//! order terms arrive in.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::binary::{encode_entry, EntryStats, PostingLayout};
use crate::error::Result;

use super::IndexRecord;

/// One framed posting entry, ready to append to the posting file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEntry {
    pub bytes: Vec<u8>,
    pub stats: EntryStats,
}

fn encode_one(record: &IndexRecord, layout: PostingLayout) -> Result<EncodedEntry> {
    let mut bytes = Vec::with_capacity(record.doc_ids.len() + 2);
    let stats = encode_entry(&record.doc_ids, layout, &mut bytes)?;
    Ok(EncodedEntry { bytes, stats })
}

/// Encode the posting entries of a batch, preserving order.
#[cfg(feature = "parallel")]
pub fn encode_batch(records: &[IndexRecord], layout: PostingLayout) -> Result<Vec<EncodedEntry>> {
    records
        .par_iter()
        .map(|record| encode_one(record, layout))
        .collect()
}

/// Encode the posting entries of a batch, preserving order.
#[cfg(not(feature = "parallel"))]
pub fn encode_batch(records: &[IndexRecord], layout: PostingLayout) -> Result<Vec<EncodedEntry>> {
    records.iter().map(|record| encode_one(record, layout)).collect()
}
