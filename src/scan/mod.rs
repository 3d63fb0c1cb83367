//! Directory scanning and file classification.
//!
//! The classifier reads one directory (non-recursively) and sorts every regular
//! file into one of three buckets by extension:
//!
//! | Extension (after stripping `.gz`) | Category |
//! |-----------------------------------|----------|
//! | `.fastq`, `.fq`                   | read     |
//! | `.fa`, `.fasta`, `.fna`           | assembly |
//! | anything else                     | skipped with a warning |
//!
//! A compressed file without an inner extension (`sample.gz`) is a fatal
//! [`ScanError::MalformedFilename`](classifier::ScanError::MalformedFilename).
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use ngs_samplesheet::scan::classifier::classify_directory;
//! use ngs_samplesheet::{ExtensionConfig, RunContext};
//!
//! let scan = classify_directory(
//!     Path::new("runs/2024-10-21"),
//!     &ExtensionConfig::default(),
//!     &RunContext::detached(),
//! )
//! .unwrap();
//! println!("{} reads, {} assemblies", scan.reads.len(), scan.assemblies.len());
//! ```

pub mod classifier;
