//! Core data types for samplesheet construction.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ClassifiedFile`]: An absolute path plus the category inferred from its extension
//! - [`SampleKey`]: The identity that joins reads and assemblies of one sample
//! - [`SampleRow`]: One output record of the samplesheet
//! - [`Samplesheet`]: All rows, grouped by sample key
//! - [`ExtensionConfig`]: The recognized read, assembly and compression extensions
//! - [`RunContext`]: The logging context a single run is carried out in
//!
//! ## Sample Keys
//!
//! Sample keys are derived from file names, never from file contents:
//!
//! | File name            | Markers       | Key     |
//! |----------------------|---------------|---------|
//! | `s1_R1_001.fastq.gz` | `_R1_`/`_R2_` | `s1`    |
//! | `s1.fastq`           | `_R1_`/`_R2_` | `s1`    |
//! | `s2_r1.fq`           | `_r1_`/`_r2_` | `s2_r1` |
//! | `s3.contigs.fasta`   | any           | `s3`    |
//!
//! [`ClassifiedFile`]: types::ClassifiedFile
//! [`SampleKey`]: types::SampleKey
//! [`SampleRow`]: row::SampleRow
//! [`Samplesheet`]: row::Samplesheet
//! [`ExtensionConfig`]: config::ExtensionConfig
//! [`RunContext`]: context::RunContext

pub mod config;
pub mod context;
pub mod row;
pub mod types;
