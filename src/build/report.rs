use std::path::PathBuf;

use serde::Serialize;

use super::CompressorConfig;

/// Summary of one compression run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub config: CompressorConfig,
    /// Non-blank input lines seen, malformed ones included.
    pub records_read: usize,
    pub records_skipped: usize,
    /// Line numbers (1-based) of skipped records.
    pub skipped_lines: Vec<usize>,
    /// Terms written to both artifacts.
    pub terms: usize,
    /// UTF-8 bytes of those terms before front coding.
    pub term_bytes: usize,
    /// Document identifiers across all posting lists.
    pub postings: usize,
    pub blocks: usize,
    pub dictionary_bytes: usize,
    pub posting_bytes: usize,
    /// Delimited-layout payloads that contain the delimiter byte.
    pub delimiter_collisions: usize,
    pub dictionary_crc32: u32,
    pub posting_crc32: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_path: Option<PathBuf>,
}

impl RunReport {
    /// Dictionary size relative to the raw terms. `None` when no terms were written.
    pub fn dictionary_ratio(&self) -> Option<f64> {
        (self.term_bytes > 0).then(|| self.dictionary_bytes as f64 / self.term_bytes as f64)
    }

    /// Average posting file bytes per document identifier.
    pub fn bytes_per_posting(&self) -> Option<f64> {
        (self.postings > 0).then(|| self.posting_bytes as f64 / self.postings as f64)
    }
}
