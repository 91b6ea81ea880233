//! Inverted index compression: front-coded dictionaries and VByte postings.
//!
//! `termpack` takes the text output of an indexer, one `term id id ...` line
//! per term in sorted order, and writes two artifacts:
//!
//! - a **dictionary**: terms grouped into fixed-size blocks, each block's
//!   shared prefix stored once, plus the byte offset of every block;
//! - a **posting file**: each term's document ids as gaps, variable-byte
//!   coded and packed, in the same order as the terms.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────────┐
//! │   bits.rs    │◀────│   vbyte.rs   │◀────│  postings.rs   │
//! │   (pack)     │     │  (encode)    │     │ (gaps, entry)  │
//! └──────────────┘     └──────────────┘     └────────────────┘
//!                                                    ▲
//! ┌──────────────┐                                   │
//! │dictionary.rs │◀──────────────┐                   │
//! │(front coding)│               │                   │
//! └──────────────┘        ┌──────┴───────────────────┴──┐
//!                         │      build (driver)         │
//!                         │ record → batch → artifacts  │
//!                         └─────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use termpack::{CompressorConfig, IndexCompressor};
//!
//! let config = CompressorConfig::default().with_output("out", "CompressedIndex");
//! let report = IndexCompressor::new(config)?.compress_file(Path::new("Index.txt"))?;
//! println!("{} terms in {} blocks", report.terms, report.blocks);
//! # Ok::<(), termpack::CompressError>(())
//! ```

// Module declarations
pub mod binary;
pub mod build;
mod error;
pub mod testing;

// Re-exports for public API
pub use binary::{
    common_prefix, compress_block, compress_postings, pack, CompressedDictionary, PostingLayout,
};
pub use build::{
    CompressorConfig, IndexCompressor, IndexRecord, MalformedPolicy, RunReport, RECORD_BATCH,
};
pub use error::{CompressError, RecordDefect, Result};
