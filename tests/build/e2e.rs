//! End-to-end runs through `compress_file`.

use std::fs;

use tempfile::TempDir;
use termpack::binary::PostingLayout;
use termpack::testing::{decode_dictionary, decode_postings, make_terms, split_posting_stream};
use termpack::{CompressError, CompressorConfig, IndexCompressor};

use crate::common::{render_index, write_input};

#[test]
fn test_compress_file_writes_both_artifacts() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        temp.path(),
        "Index.txt",
        "automata 5\nautomate 1 2\nautomatic 3\nautomation 4 200\n",
    );
    let out = temp.path().join("out");
    let config = CompressorConfig::default().with_output(&out, "CompressedIndex");

    let report = IndexCompressor::new(config).unwrap().compress_file(&input).unwrap();

    let dictionary_path = out.join("CompressedIndexDictionary.txt");
    let posting_path = out.join("CompressedIndexPosting.bin");
    assert_eq!(report.dictionary_path.as_deref(), Some(dictionary_path.as_path()));
    assert_eq!(report.posting_path.as_deref(), Some(posting_path.as_path()));

    let dictionary = fs::read_to_string(&dictionary_path).unwrap();
    assert_eq!(dictionary, "8automat*a1◊e2◊ic3◊ion\n0");

    let postings = fs::read(&posting_path).unwrap();
    assert_eq!(postings.len(), report.posting_bytes);
    assert_eq!(crc32fast::hash(&postings), report.posting_crc32);
}

#[test]
fn test_single_id_posting_is_one_byte() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "Index.txt", "five 5\nzero 0\n");
    let config = CompressorConfig::default().with_output(temp.path(), "Run");

    IndexCompressor::new(config).unwrap().compress_file(&input).unwrap();

    let postings = fs::read(temp.path().join("RunPosting.bin")).unwrap();
    assert_eq!(postings, vec![0x85, b'\n', 0x80, b'\n']);
}

#[test]
fn test_missing_input_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let config = CompressorConfig::default().with_output(&out, "CompressedIndex");

    let err = IndexCompressor::new(config)
        .unwrap()
        .compress_file(&temp.path().join("nope.txt"))
        .unwrap_err();

    assert!(matches!(err, CompressError::Io { .. }));
    assert!(!out.exists());
}

#[test]
fn test_unwritable_posting_path_leaves_no_dictionary() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "Index.txt", "alpha 1\n");
    let out = temp.path().join("out");
    fs::create_dir_all(out.join("CompressedIndexPosting.bin")).unwrap();
    let config = CompressorConfig::default().with_output(&out, "CompressedIndex");

    let err = IndexCompressor::new(config)
        .unwrap()
        .compress_file(&input)
        .unwrap_err();

    assert!(matches!(err, CompressError::Io { .. }));
    assert!(!out.join("CompressedIndexDictionary.txt").exists());
}

#[test]
fn test_empty_input_gives_empty_artifacts() {
    let temp = TempDir::new().unwrap();
    let input = write_input(temp.path(), "Index.txt", "");
    let config = CompressorConfig::default().with_output(temp.path(), "Empty");

    let report = IndexCompressor::new(config).unwrap().compress_file(&input).unwrap();

    assert_eq!(report.blocks, 0);
    assert!(fs::read(temp.path().join("EmptyDictionary.txt")).unwrap().is_empty());
    assert!(fs::read(temp.path().join("EmptyPosting.bin")).unwrap().is_empty());
}

#[test]
fn test_large_index_round_trips() {
    let temp = TempDir::new().unwrap();
    let terms = make_terms(5000);
    let index: Vec<(String, Vec<u32>)> = terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            let i = i as u32;
            (term.clone(), vec![i, i * 3 + 1, i * 1000 + 7])
        })
        .collect();
    let input = write_input(temp.path(), "Index.txt", &render_index(&index));
    let config = CompressorConfig::default()
        .with_output(temp.path(), "Big")
        .with_block_size(8)
        .with_layout(PostingLayout::LengthPrefixed);

    let report = IndexCompressor::new(config).unwrap().compress_file(&input).unwrap();
    assert_eq!(report.terms, 5000);
    assert_eq!(report.blocks, 625);

    let dictionary = fs::read_to_string(temp.path().join("BigDictionary.txt")).unwrap();
    assert_eq!(decode_dictionary(&dictionary).unwrap(), terms);

    let postings = fs::read(temp.path().join("BigPosting.bin")).unwrap();
    let entries = split_posting_stream(&postings, PostingLayout::LengthPrefixed).unwrap();
    for (entry, (_, ids)) in entries.iter().zip(&index) {
        assert_eq!(&decode_postings(entry).unwrap(), ids);
    }
}

#[test]
fn test_rerun_overwrites_artifacts() {
    let temp = TempDir::new().unwrap();
    let config = CompressorConfig::default().with_output(temp.path(), "Twice");
    let compressor = IndexCompressor::new(config).unwrap();

    let first = write_input(temp.path(), "a.txt", "alpha 1\nbeta 2\ngamma 3\ndelta 4\nomega 5\n");
    compressor.compress_file(&first).unwrap();
    let second = write_input(temp.path(), "b.txt", "solo 1\n");
    compressor.compress_file(&second).unwrap();

    let dictionary = fs::read_to_string(temp.path().join("TwiceDictionary.txt")).unwrap();
    assert_eq!(dictionary, "4solo*\n0");
}
