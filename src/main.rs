use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use termpack::{CompressorConfig, IndexCompressor, RunReport};

mod cli;
use cli::{display, log_filter, Cli, Commands, Overrides};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(log_filter(cli.verbose, cli.quiet)))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Compress {
            input,
            config,
            output_dir,
            basename,
            block_size,
            skip_malformed,
            length_prefixed,
            json,
        } => {
            let overrides = Overrides {
                output_dir,
                basename,
                block_size,
                skip_malformed,
                length_prefixed,
            };
            run_compress(&input, config.as_deref(), overrides, json)
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_compress(input: &Path, config: Option<&Path>, overrides: Overrides, json: bool) -> Result<()> {
    let base = match config {
        Some(path) => CompressorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CompressorConfig::default(),
    };

    let compressor = IndexCompressor::new(overrides.apply(base)).context("invalid configuration")?;
    let report = compressor
        .compress_file(input)
        .with_context(|| format!("compressing {}", input.display()))?;

    print_summary(&report, json)
}

fn print_summary(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report).context("serializing run report")?);
    } else {
        display::print_report(report);
    }
    Ok(())
}
