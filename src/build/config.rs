use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::binary::{
    dictionary_file_name, posting_file_name, DEFAULT_BASENAME, DEFAULT_BLOCK_SIZE, MIN_BLOCK_SIZE,
};
use crate::error::{CompressError, Result};

pub use crate::binary::PostingLayout;

/// What the driver does with a line that doesn't parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedPolicy {
    /// Stop the run at the first malformed record.
    #[default]
    Abort,
    /// Log it, count it, and move on.
    Skip,
}

/// Settings for one compression run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressorConfig {
    /// Terms per front-coded block (at least 2).
    pub block_size: usize,
    /// Directory the two artifacts are written into.
    pub output_dir: PathBuf,
    /// Shared file name prefix of the two artifacts.
    pub basename: String,
    pub on_malformed: MalformedPolicy,
    pub posting_layout: PostingLayout,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            output_dir: PathBuf::from("."),
            basename: DEFAULT_BASENAME.to_string(),
            on_malformed: MalformedPolicy::default(),
            posting_layout: PostingLayout::default(),
        }
    }
}

impl CompressorConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CompressError::io(format!("Failed to read config {}", path.display()), e))?;
        serde_json::from_str(&content).map_err(|e| {
            CompressError::InvalidArgument(format!("Invalid config JSON in {}: {}", path.display(), e))
        })
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_output(mut self, output_dir: impl Into<PathBuf>, basename: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self.basename = basename.into();
        self
    }

    pub fn with_policy(mut self, on_malformed: MalformedPolicy) -> Self {
        self.on_malformed = on_malformed;
        self
    }

    pub fn with_layout(mut self, posting_layout: PostingLayout) -> Self {
        self.posting_layout = posting_layout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(CompressError::InvalidArgument(format!(
                "block size {} is below the minimum of {}",
                self.block_size, MIN_BLOCK_SIZE
            )));
        }
        if self.basename.is_empty() || self.basename.contains(['/', '\\']) {
            return Err(CompressError::InvalidArgument(format!(
                "basename {:?} must be a non-empty file name prefix",
                self.basename
            )));
        }
        Ok(())
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.output_dir.join(dictionary_file_name(&self.basename))
    }

    pub fn posting_path(&self) -> PathBuf {
        self.output_dir.join(posting_file_name(&self.basename))
    }
}
