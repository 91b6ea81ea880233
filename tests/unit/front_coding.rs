//! Dictionary round trips through the public API.

use termpack::binary::CompressedDictionary;
use termpack::testing::{decode_dictionary, make_terms, split_dictionary_file};
use termpack::{CompressorConfig, IndexCompressor};

use crate::common::{compress_text, render_index};

fn build(terms: &[String], block_size: usize) -> CompressedDictionary {
    let mut dictionary = CompressedDictionary::new();
    for block in terms.chunks(block_size) {
        dictionary.append_block(block).unwrap();
    }
    dictionary
}

#[test]
fn multi_block_with_partial_last_block() {
    let terms = make_terms(11);
    let dictionary = build(&terms, 4);
    assert_eq!(dictionary.block_count(), 3);

    let text = String::from_utf8(dictionary.to_bytes()).unwrap();
    assert_eq!(decode_dictionary(&text).unwrap(), terms);

    let (buffer, pointers) = split_dictionary_file(&text).unwrap();
    assert_eq!(buffer, dictionary.buffer());
    assert_eq!(pointers, dictionary.pointers());
}

#[test]
fn every_block_size_round_trips() {
    let terms = make_terms(37);
    for block_size in 2..=12 {
        let dictionary = build(&terms, block_size);
        assert_eq!(dictionary.block_count(), terms.len().div_ceil(block_size));
        let text = String::from_utf8(dictionary.to_bytes()).unwrap();
        assert_eq!(decode_dictionary(&text).unwrap(), terms, "block size {block_size}");
    }
}

#[test]
fn pointers_index_block_starts() {
    let terms: Vec<String> = ["automata", "automate", "automatic", "automation", "zebra", "zero"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    let dictionary = build(&terms, 4);
    let pointers = dictionary.pointers();
    assert_eq!(pointers, &[0, "8automat*a1◊e2◊ic3◊ion".len()]);
    assert!(dictionary.buffer()[pointers[1]..].starts_with("5ze*bra"));
}

#[test]
fn unicode_terms_round_trip_through_driver() {
    let index: Vec<(&str, Vec<u32>)> = vec![
        ("café", vec![1]),
        ("cafè", vec![2]),
        ("naïve", vec![3, 4]),
        ("naïvety", vec![5]),
        ("తెలుగు", vec![6]),
    ];
    let config = CompressorConfig::default().with_block_size(2);
    let (report, dictionary, _) = compress_text(&render_index(&index), config);
    assert_eq!(report.blocks, 3);

    let text = String::from_utf8(dictionary).unwrap();
    let expected: Vec<&str> = index.iter().map(|(t, _)| *t).collect();
    assert_eq!(decode_dictionary(&text).unwrap(), expected);
}

#[test]
fn driver_dictionary_matches_direct_build() {
    let terms = make_terms(50);
    let index: Vec<(String, Vec<u32>)> = terms.iter().map(|t| (t.clone(), vec![7])).collect();
    let compressor = IndexCompressor::new(CompressorConfig::default().with_block_size(6)).unwrap();
    let mut dictionary = Vec::new();
    compressor
        .compress_stream(render_index(&index).as_bytes(), &mut dictionary, Vec::new())
        .unwrap();
    assert_eq!(dictionary, build(&terms, 6).to_bytes());
}
