//! Samplesheet assembly and output.
//!
//! [`build_samplesheet`] runs the whole pipeline for one directory:
//! classification, grouping and assembly. Nothing is written here; the
//! resulting [`Samplesheet`] is handed to [`writer`] or any other consumer.

pub mod assembler;
pub mod writer;

use std::path::Path;

use crate::core::config::ExtensionConfig;
use crate::core::context::RunContext;
use crate::core::row::Samplesheet;
use crate::error::SamplesheetError;
use crate::grouping::engine::GroupingEngine;
use crate::grouping::markers::MateMarkers;
use crate::scan::classifier::classify_directory;

/// Classify the files in `dir`, group them by sample and assemble the rows.
///
/// # Errors
///
/// Returns `SamplesheetError::Scan` if the directory is missing or holds a
/// malformed file name, or `SamplesheetError::Grouping` if paired-end mates
/// do not line up. No samplesheet is produced in either case.
pub fn build_samplesheet(
    dir: &Path,
    markers: &MateMarkers,
    config: &ExtensionConfig,
    ctx: &RunContext,
) -> Result<Samplesheet, SamplesheetError> {
    let scan = classify_directory(dir, config, ctx)?;
    let groups = GroupingEngine::new(markers, ctx).group(&scan)?;
    Ok(assembler::assemble(
        &groups.paired,
        &groups.single,
        &groups.assemblies,
        ctx,
    ))
}
