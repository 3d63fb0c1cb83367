//! Top-level error type for a samplesheet run.
//!
//! Each component reports its own error enum; [`SamplesheetError`] collects
//! them so callers can map a failure to a process exit status:
//!
//! | Failure                         | Exit status |
//! |---------------------------------|-------------|
//! | input directory not found       | 2 (`ENOENT`) |
//! | anything else that is fatal     | 1           |

use thiserror::Error;

use crate::grouping::engine::GroupingError;
use crate::samplesheet::writer::WriteError;
use crate::scan::classifier::ScanError;
use crate::utils::validation::MarkerError;

/// Exit status for a missing input directory
pub const EXIT_NOT_FOUND: u8 = 2;

/// Exit status for every other fatal error
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum SamplesheetError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Grouping(#[from] GroupingError),

    #[error("Invalid mate markers: {0}")]
    Marker(#[from] MarkerError),

    #[error("Failed to write samplesheet: {0}")]
    Write(#[from] WriteError),
}

impl SamplesheetError {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Scan(ScanError::NotFound(_)) => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}
