//! Gap coding and posting entry framing.

use termpack::binary::{encode_entry, gaps, PostingLayout, POSTING_DELIMITER};
use termpack::testing::{decode_postings, split_posting_stream};
use termpack::{compress_postings, pack, CompressError, RecordDefect};

#[test]
fn gaps_start_from_zero() {
    assert_eq!(gaps(&[5]).unwrap(), vec![5]);
    assert_eq!(gaps(&[0, 3, 10]).unwrap(), vec![0, 3, 7]);
}

#[test]
fn gaps_reject_bad_lists() {
    assert_eq!(gaps(&[]), Err(RecordDefect::EmptyPostings));
    assert_eq!(
        gaps(&[4, 4]),
        Err(RecordDefect::NotIncreasing { prev: 4, next: 4 })
    );
}

#[test]
fn single_id_compresses_to_one_byte() {
    let code = compress_postings(&[5]).unwrap();
    assert_eq!(code, "10000101");
    assert_eq!(pack(&code).unwrap(), vec![0x85]);
}

#[test]
fn delimited_entry_ends_with_newline() {
    let mut out = Vec::new();
    let stats = encode_entry(&[1, 2, 3], PostingLayout::Delimited, &mut out).unwrap();
    assert_eq!(out, vec![0x81, 0x81, 0x81, POSTING_DELIMITER]);
    assert_eq!(stats.payload_len, 3);
    assert_eq!(stats.written_len, 4);
    assert!(!stats.delimiter_collision);
}

#[test]
fn delimiter_collision_is_reported() {
    // 10 is 0x0A in the first group of a two-group code
    let mut out = Vec::new();
    let stats = encode_entry(&[10 * 128], PostingLayout::Delimited, &mut out).unwrap();
    assert!(stats.delimiter_collision);
}

#[test]
fn length_prefixed_entries_split_back() {
    let lists: Vec<Vec<u32>> = vec![vec![1290], vec![0, 1, 2], vec![7, 1_000_000]];
    let mut stream = Vec::new();
    for ids in &lists {
        encode_entry(ids, PostingLayout::LengthPrefixed, &mut stream).unwrap();
    }
    let entries = split_posting_stream(&stream, PostingLayout::LengthPrefixed).unwrap();
    assert_eq!(entries.len(), lists.len());
    for (entry, ids) in entries.iter().zip(&lists) {
        assert_eq!(&decode_postings(entry).unwrap(), ids);
    }
}

#[test]
fn bad_list_surfaces_as_malformed_record() {
    let mut out = Vec::new();
    let err = encode_entry(&[9, 3], PostingLayout::Delimited, &mut out).unwrap_err();
    assert!(matches!(err, CompressError::MalformedRecord { .. }));
    assert!(err.is_recoverable());
}
