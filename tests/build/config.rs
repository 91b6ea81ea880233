//! Config files and validation as seen through `IndexCompressor`.

use std::fs;

use tempfile::TempDir;
use termpack::binary::PostingLayout;
use termpack::{CompressError, CompressorConfig, IndexCompressor, MalformedPolicy};

#[test]
fn test_load_partial_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("termpack.json");
    fs::write(
        &path,
        r#"{ "blockSize": 16, "onMalformed": "skip", "postingLayout": "length-prefixed" }"#,
    )
    .unwrap();

    let config = CompressorConfig::load(&path).unwrap();
    assert_eq!(config.block_size, 16);
    assert_eq!(config.on_malformed, MalformedPolicy::Skip);
    assert_eq!(config.posting_layout, PostingLayout::LengthPrefixed);
    assert_eq!(config.basename, "CompressedIndex");
}

#[test]
fn test_block_size_below_two_rejected() {
    for block_size in [0, 1] {
        let err = IndexCompressor::new(CompressorConfig::default().with_block_size(block_size))
            .unwrap_err();
        assert!(matches!(err, CompressError::InvalidArgument(_)));
    }
}

#[test]
fn test_basename_with_separator_rejected() {
    let config = CompressorConfig::default().with_output(".", "../escape");
    assert!(matches!(
        IndexCompressor::new(config),
        Err(CompressError::InvalidArgument(_))
    ));
}
