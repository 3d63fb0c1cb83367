//! # ngs-samplesheet
//!
//! A library for assembling pipeline samplesheets from a directory of sequencing data.
//!
//! Sequencing runs rarely arrive with a manifest. What does arrive is a directory of
//! FASTQ reads (paired-end mates, single-end or long reads) and FASTA assemblies whose
//! file names encode the sample they belong to. Downstream pipelines need a
//! samplesheet: one row per sample and input combination.
//!
//! `ngs-samplesheet` builds that samplesheet in three steps:
//!
//! 1. **Classify**: scan the directory, strip compression suffixes and bucket each file
//!    into reads or assemblies by extension
//! 2. **Group**: derive a sample key from each file name using the mate markers
//!    (e.g. `_R1_` / `_R2_`), pair mate files and collect unpaired data
//! 3. **Assemble**: merge paired reads, long reads and assemblies into per-sample rows
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use ngs_samplesheet::{build_samplesheet, ExtensionConfig, MateMarkers, RunContext};
//!
//! let markers = MateMarkers::new("_R1_", "_R2_").unwrap();
//! let config = ExtensionConfig::default();
//! let ctx = RunContext::for_directory(Path::new("runs/2024-10-21"));
//!
//! let sheet = build_samplesheet(Path::new("runs/2024-10-21"), &markers, &config, &ctx).unwrap();
//! for row in sheet.rows() {
//!     println!("{}: {:?}", row.sample, row.fastq_1);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data model for classified files, sample keys and samplesheet rows
//! - [`scan`]: Directory scanning and file classification
//! - [`grouping`]: Mate markers and the sample grouping engine
//! - [`samplesheet`]: Samplesheet assembly and serialization
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod error;
pub mod grouping;
pub mod samplesheet;
pub mod scan;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::config::ExtensionConfig;
pub use crate::core::context::RunContext;
pub use crate::core::row::{SampleRow, Samplesheet};
pub use crate::core::types::*;
pub use error::SamplesheetError;
pub use grouping::engine::{GroupingEngine, MatePaths, PairedGroup, SampleGroups, SingleGroup};
pub use grouping::markers::{MarkerMatch, MateMarkers};
pub use samplesheet::assembler::assemble;
pub use samplesheet::build_samplesheet;
pub use scan::classifier::{classify_directory, classify_path, ScanResult};
