// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the termpack command-line interface.
//!
//! One subcommand, `compress`, that turns an index text file into the
//! dictionary and posting artifacts. Settings come from an optional JSON
//! config file; flags given on the command line win over it.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use termpack::{CompressorConfig, MalformedPolicy, PostingLayout};

#[derive(Parser)]
#[command(
    name = "termpack",
    about = "Compress a sorted inverted index into a front-coded dictionary and VByte postings",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress an index file (one `term id id ...` line per term, terms sorted)
    Compress {
        /// Index text file
        #[arg(short, long)]
        input: PathBuf,

        /// JSON config file (blockSize, outputDir, basename, onMalformed, postingLayout)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory for the two output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File name prefix shared by both output files
        #[arg(short, long)]
        basename: Option<String>,

        /// Terms per front-coded dictionary block (at least 2)
        #[arg(short = 'k', long)]
        block_size: Option<usize>,

        /// Log and skip malformed lines instead of aborting
        #[arg(long)]
        skip_malformed: bool,

        /// Frame posting entries with a length prefix instead of a newline
        #[arg(long)]
        length_prefixed: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Flags that override the config file.
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub basename: Option<String>,
    pub block_size: Option<usize>,
    pub skip_malformed: bool,
    pub length_prefixed: bool,
}

impl Overrides {
    pub fn apply(self, mut config: CompressorConfig) -> CompressorConfig {
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(basename) = self.basename {
            config.basename = basename;
        }
        if let Some(block_size) = self.block_size {
            config.block_size = block_size;
        }
        if self.skip_malformed {
            config.on_malformed = MalformedPolicy::Skip;
        }
        if self.length_prefixed {
            config.posting_layout = PostingLayout::LengthPrefixed;
        }
        config
    }
}

/// Default log filter for the given verbosity flags.
pub fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}
