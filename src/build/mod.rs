// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compression driver: index text in, dictionary and posting artifacts out.
//!
//! One pass over the input. Each line becomes an `IndexRecord`; its posting
//! list goes straight to the posting stream and its term goes into the
//! current block. Full blocks are front-coded into the dictionary buffer,
//! the trailing partial block is flushed at the end, and the dictionary is
//! written last because its pointers follow the blocks.
//!
//! Records are gathered in batches of `RECORD_BATCH` so the posting side can
//! be encoded in parallel (see `parallel`). Terms and posting entries still
//! leave in input order: posting entry `i` belongs to the `i`-th term.
//!
//! A run that returns an error may have left partial files behind. They are
//! not resumable and should be discarded.

pub mod config;
pub mod parallel;
pub mod record;
pub mod report;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crc32fast::Hasher as Crc32Hasher;
use log::{debug, info, warn};

use crate::binary::CompressedDictionary;
use crate::error::{CompressError, RecordDefect, Result};

pub use config::{CompressorConfig, MalformedPolicy, PostingLayout};
pub use parallel::{encode_batch, EncodedEntry};
pub use record::IndexRecord;
pub use report::RunReport;

/// Records gathered before their postings are encoded.
pub const RECORD_BATCH: usize = 1024;

/// Compresses a sorted term/posting index into the two termpack artifacts.
#[derive(Debug, Clone)]
pub struct IndexCompressor {
    config: CompressorConfig,
}

impl IndexCompressor {
    pub fn new(config: CompressorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress an index file into `<output_dir>/<basename>Dictionary.txt`
    /// and `<output_dir>/<basename>Posting.bin`.
    ///
    /// The input is opened before anything is created, so a missing input
    /// leaves no output behind. If only one artifact can be created, the
    /// other is removed again.
    pub fn compress_file(&self, input: &Path) -> Result<RunReport> {
        let source = File::open(input)
            .map_err(|e| CompressError::io(format!("Failed to open input {}", input.display()), e))?;

        fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            CompressError::io(
                format!("Failed to create output dir {}", self.config.output_dir.display()),
                e,
            )
        })?;

        let dictionary_path = self.config.dictionary_path();
        let posting_path = self.config.posting_path();
        let dictionary = create(&dictionary_path)?;
        let postings = match create(&posting_path) {
            Ok(postings) => postings,
            Err(e) => {
                drop(dictionary);
                if let Err(cleanup) = fs::remove_file(&dictionary_path) {
                    warn!("could not remove {}: {}", dictionary_path.display(), cleanup);
                }
                return Err(e);
            }
        };

        let mut report = self.compress_stream(BufReader::new(source), dictionary, postings)?;

        info!(
            "compressed {} terms into {} blocks: {} ({} bytes), {} ({} bytes)",
            report.terms,
            report.blocks,
            dictionary_path.display(),
            report.dictionary_bytes,
            posting_path.display(),
            report.posting_bytes
        );
        report.dictionary_path = Some(dictionary_path);
        report.posting_path = Some(posting_path);
        Ok(report)
    }

    /// Compress records read from `input`, writing the two artifacts to the
    /// given writers. Both writers are flushed before returning `Ok`.
    pub fn compress_stream<R, D, P>(&self, mut input: R, dictionary: D, postings: P) -> Result<RunReport>
    where
        R: BufRead,
        D: Write,
        P: Write,
    {
        let mut run = CompressionRun::new(&self.config, postings);
        let mut batch: Vec<IndexRecord> = Vec::with_capacity(RECORD_BATCH);
        let mut raw = Vec::new();
        let mut line_no = 0usize;

        loop {
            raw.clear();
            let read = input
                .read_until(b'\n', &mut raw)
                .map_err(|e| CompressError::io(format!("Failed to read input line {}", line_no + 1), e))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let parsed = std::str::from_utf8(&raw)
                .map_err(|_| RecordDefect::InvalidUtf8)
                .and_then(IndexRecord::parse);
            match parsed {
                Ok(Some(record)) => {
                    run.records_read += 1;
                    batch.push(record);
                    if batch.len() == RECORD_BATCH {
                        run.process_batch(&mut batch)?;
                    }
                }
                Ok(None) => {}
                Err(defect) => {
                    run.records_read += 1;
                    run.reject(line_no, defect)?;
                }
            }
        }

        run.process_batch(&mut batch)?;
        run.finish(dictionary)
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| CompressError::io(format!("Failed to create {}", path.display()), e))
}

/// State owned by one run: dictionary, open block, posting stream, counters.
struct CompressionRun<'a, P: Write> {
    config: &'a CompressorConfig,
    postings: P,
    posting_crc: Crc32Hasher,
    posting_bytes: usize,
    dictionary: CompressedDictionary,
    block: Vec<String>,
    records_read: usize,
    skipped_lines: Vec<usize>,
    terms: usize,
    term_bytes: usize,
    doc_ids: usize,
    delimiter_collisions: usize,
}

impl<'a, P: Write> CompressionRun<'a, P> {
    fn new(config: &'a CompressorConfig, postings: P) -> Self {
        Self {
            config,
            postings,
            posting_crc: Crc32Hasher::new(),
            posting_bytes: 0,
            dictionary: CompressedDictionary::new(),
            block: Vec::with_capacity(config.block_size),
            records_read: 0,
            skipped_lines: Vec::new(),
            terms: 0,
            term_bytes: 0,
            doc_ids: 0,
            delimiter_collisions: 0,
        }
    }

    fn reject(&mut self, line: usize, defect: RecordDefect) -> Result<()> {
        match self.config.on_malformed {
            MalformedPolicy::Abort => Err(CompressError::MalformedRecord { line, defect }),
            MalformedPolicy::Skip => {
                warn!("skipping line {}: {}", line, defect);
                self.skipped_lines.push(line);
                Ok(())
            }
        }
    }

    /// Encode and write the batch's postings, then feed its terms to the
    /// dictionary. Leaves `batch` empty.
    fn process_batch(&mut self, batch: &mut Vec<IndexRecord>) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let encoded = encode_batch(batch, self.config.posting_layout)?;
        for (record, entry) in batch.drain(..).zip(encoded) {
            self.write_posting(&record, &entry)?;
            self.push_term(record.term)?;
        }
        Ok(())
    }

    fn write_posting(&mut self, record: &IndexRecord, entry: &EncodedEntry) -> Result<()> {
        self.postings
            .write_all(&entry.bytes)
            .map_err(|e| CompressError::io("Failed to write posting entry", e))?;
        self.posting_crc.update(&entry.bytes);
        self.posting_bytes += entry.bytes.len();
        self.doc_ids += record.doc_ids.len();

        if entry.stats.delimiter_collision && self.config.posting_layout == PostingLayout::Delimited {
            if self.delimiter_collisions == 0 {
                warn!(
                    "posting entry for {:?} contains the delimiter byte; the delimited layout cannot be split unambiguously",
                    record.term
                );
            } else {
                debug!("posting entry for {:?} contains the delimiter byte", record.term);
            }
            self.delimiter_collisions += 1;
        }
        Ok(())
    }

    fn push_term(&mut self, term: String) -> Result<()> {
        self.terms += 1;
        self.term_bytes += term.len();
        self.block.push(term);
        if self.block.len() == self.config.block_size {
            self.flush_block()?;
        }
        Ok(())
    }

    fn flush_block(&mut self) -> Result<()> {
        if self.block.is_empty() {
            return Ok(());
        }
        self.dictionary.append_block(&self.block)?;
        self.block.clear();
        Ok(())
    }

    fn finish<D: Write>(mut self, mut dictionary_out: D) -> Result<RunReport> {
        self.flush_block()?;

        let expected_blocks = self.terms.div_ceil(self.config.block_size);
        if self.dictionary.block_count() != expected_blocks {
            return Err(CompressError::InvariantViolation(format!(
                "{} terms in blocks of {} should give {} blocks, found {}",
                self.terms,
                self.config.block_size,
                expected_blocks,
                self.dictionary.block_count()
            )));
        }

        self.postings
            .flush()
            .map_err(|e| CompressError::io("Failed to flush posting output", e))?;

        let dictionary_bytes = self.dictionary.to_bytes();
        dictionary_out
            .write_all(&dictionary_bytes)
            .and_then(|()| dictionary_out.flush())
            .map_err(|e| CompressError::io("Failed to write dictionary output", e))?;

        if self.delimiter_collisions > 0 {
            warn!(
                "{} of {} posting entries contain the delimiter byte",
                self.delimiter_collisions, self.terms
            );
        }

        Ok(RunReport {
            config: self.config.clone(),
            records_read: self.records_read,
            records_skipped: self.skipped_lines.len(),
            skipped_lines: self.skipped_lines,
            terms: self.terms,
            term_bytes: self.term_bytes,
            postings: self.doc_ids,
            blocks: self.dictionary.block_count(),
            dictionary_bytes: dictionary_bytes.len(),
            posting_bytes: self.posting_bytes,
            delimiter_collisions: self.delimiter_collisions,
            dictionary_crc32: crc32fast::hash(&dictionary_bytes),
            posting_crc32: self.posting_crc.finalize(),
            dictionary_path: None,
            posting_path: None,
        })
    }
}
