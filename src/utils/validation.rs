//! Centralized validation helpers.

/// Marker configuration errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("Mate marker must not be empty or whitespace")]
    Blank,
    #[error("Mate marker '{0}' must not contain a path separator")]
    ContainsSeparator(String),
    #[error("Mate-1 and mate-2 markers must differ, both are '{0}'")]
    Identical(String),
}

/// Validate a single mate marker.
///
/// Markers are matched against file names, so they cannot be blank and
/// cannot contain `/` or `\`.
///
/// # Examples
///
/// ```
/// use ngs_samplesheet::utils::validation::validate_marker;
///
/// assert!(validate_marker("_R1_").is_ok());
/// assert!(validate_marker("  ").is_err());
/// assert!(validate_marker("run/_R1_").is_err());
/// ```
///
/// # Errors
///
/// Returns `MarkerError::Blank` or `MarkerError::ContainsSeparator`.
pub fn validate_marker(marker: &str) -> Result<(), MarkerError> {
    if marker.trim().is_empty() {
        return Err(MarkerError::Blank);
    }
    if marker.contains('/') || marker.contains('\\') {
        return Err(MarkerError::ContainsSeparator(marker.to_string()));
    }
    Ok(())
}

/// Validate a mate-1/mate-2 marker pair
///
/// # Errors
///
/// Returns the first `MarkerError` of either marker, or
/// `MarkerError::Identical` if both markers are equal.
pub fn validate_markers(mate1: &str, mate2: &str) -> Result<(), MarkerError> {
    validate_marker(mate1)?;
    validate_marker(mate2)?;
    if mate1 == mate2 {
        return Err(MarkerError::Identical(mate1.to_string()));
    }
    Ok(())
}
