//! Command-line interface for ngs-samplesheet.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **samplesheet**: Build a samplesheet from a directory of reads and assemblies
//!
//! ## Usage
//!
//! ```text
//! # Write a CSV samplesheet to stdout
//! ngs-samplesheet samplesheet runs/2024-10-21
//!
//! # Custom mate markers, written to a file
//! ngs-samplesheet samplesheet runs/2024-10-21 -1 _1. -2 _2. -o samplesheet.csv
//!
//! # JSON output for scripting
//! ngs-samplesheet samplesheet runs/2024-10-21 --format json
//! ```

use clap::{Parser, Subcommand};

use crate::samplesheet::writer::SheetFormat;

pub mod samplesheet;

#[derive(Parser)]
#[command(name = "ngs-samplesheet")]
#[command(version)]
#[command(about = "Build pipeline samplesheets from sequencing data directories")]
#[command(
    long_about = "ngs-samplesheet scans a directory of FASTQ reads and FASTA assemblies and groups them by sample.\n\nSample names are taken from file names:\n- Paired-end mates are recognised by their mate markers (default _R1_ / _R2_)\n- Unmarked reads become long reads, keyed by the name before the first dot\n- Assemblies are keyed the same way and merged into the matching sample"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "csv")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a samplesheet from a directory of sequencing files
    Samplesheet(samplesheet::SamplesheetArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl From<OutputFormat> for SheetFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
        }
    }
}
