//! Samplesheet serialization.
//!
//! Rows are written in sample key order with the columns
//! `sample,fastq_1,fastq_2,long_reads,assembly`; absent files are empty cells
//! in CSV/TSV and `null` in JSON. An empty samplesheet still gets its header.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::row::{SampleRow, Samplesheet, SAMPLESHEET_COLUMNS};

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Output file '{}' exists. Use --force to overwrite.", .0.display())]
    OutputExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SheetFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl SheetFormat {
    fn delimiter(self) -> u8 {
        match self {
            Self::Tsv => b'\t',
            Self::Csv | Self::Json => b',',
        }
    }
}

/// Write a samplesheet to any writer
///
/// # Errors
///
/// Returns `WriteError` if serialization or writing fails, including when a
/// path is not valid UTF-8.
pub fn write_samplesheet<W: Write>(
    sheet: &Samplesheet,
    format: SheetFormat,
    mut writer: W,
) -> Result<(), WriteError> {
    match format {
        SheetFormat::Csv | SheetFormat::Tsv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .delimiter(format.delimiter())
                .has_headers(false)
                .from_writer(writer);
            csv_writer.write_record(SAMPLESHEET_COLUMNS)?;
            for row in sheet.rows() {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        SheetFormat::Json => {
            let rows: Vec<&SampleRow> = sheet.rows().collect();
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Write a samplesheet to `path`.
///
/// The whole samplesheet is serialized before the file is created, so a
/// failure never leaves a partial file behind.
///
/// # Errors
///
/// Returns `WriteError::OutputExists` if `path` exists and `force` is false,
/// or any error from [`write_samplesheet`] or from writing the file.
pub fn write_samplesheet_to_path(
    sheet: &Samplesheet,
    format: SheetFormat,
    path: &Path,
    force: bool,
) -> Result<(), WriteError> {
    if path.exists() && !force {
        return Err(WriteError::OutputExists(path.to_path_buf()));
    }

    let mut buffer = Vec::new();
    write_samplesheet(sheet, format, &mut buffer)?;
    std::fs::write(path, buffer)?;

    info!("Wrote {} row(s) to {}", sheet.row_count(), path.display());
    Ok(())
}
