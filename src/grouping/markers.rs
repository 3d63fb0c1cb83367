use serde::{Deserialize, Serialize};

use crate::utils::validation::{validate_markers, MarkerError};

/// How a mate marker is located inside a file name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerMatch {
    /// The marker must not run into alphanumeric characters on either side.
    ///
    /// A side is satisfied when the marker's own edge character there is not
    /// alphanumeric, or when the neighbouring character of the file name is
    /// not alphanumeric (or is the start/end of the name). `_R1_` therefore
    /// matches anywhere it occurs, while `R1` matches `s_R1.fq` but not `sR10.fq`.
    #[default]
    Delimited,
    /// Any occurrence of the marker matches
    Substring,
}

/// The pair of strings identifying first and second mates of paired-end reads
///
/// Deserialized markers go through the same validation as [`MateMarkers::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMarkers")]
pub struct MateMarkers {
    mate1: String,
    mate2: String,
    mode: MarkerMatch,
}

#[derive(Deserialize)]
struct RawMarkers {
    mate1: String,
    mate2: String,
    #[serde(default)]
    mode: MarkerMatch,
}

impl TryFrom<RawMarkers> for MateMarkers {
    type Error = MarkerError;

    fn try_from(raw: RawMarkers) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.mate1, raw.mate2)?.with_mode(raw.mode))
    }
}

impl MateMarkers {
    /// Markers using [`MarkerMatch::Delimited`] matching
    ///
    /// # Errors
    ///
    /// Returns a `MarkerError` if either marker is blank, contains a path
    /// separator, or both markers are the same.
    pub fn new(mate1: impl Into<String>, mate2: impl Into<String>) -> Result<Self, MarkerError> {
        let mate1 = mate1.into();
        let mate2 = mate2.into();
        validate_markers(&mate1, &mate2)?;
        Ok(Self {
            mate1,
            mate2,
            mode: MarkerMatch::default(),
        })
    }

    #[must_use]
    pub fn with_mode(mut self, mode: MarkerMatch) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn mate1(&self) -> &str {
        &self.mate1
    }

    #[must_use]
    pub fn mate2(&self) -> &str {
        &self.mate2
    }

    #[must_use]
    pub fn mode(&self) -> MarkerMatch {
        self.mode
    }

    /// File name prefix before the last matching mate-1 marker
    #[must_use]
    pub fn mate1_prefix<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.rfind(file_name, &self.mate1).map(|i| &file_name[..i])
    }

    /// File name prefix before the last matching mate-2 marker
    #[must_use]
    pub fn mate2_prefix<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.rfind(file_name, &self.mate2).map(|i| &file_name[..i])
    }

    /// True if either marker matches the file name
    #[must_use]
    pub fn is_marked(&self, file_name: &str) -> bool {
        self.rfind(file_name, &self.mate1).is_some() || self.rfind(file_name, &self.mate2).is_some()
    }

    /// Start of the last matching occurrence, overlapping occurrences included
    fn rfind(&self, file_name: &str, marker: &str) -> Option<usize> {
        file_name
            .char_indices()
            .rev()
            .map(|(start, _)| start)
            .filter(|&start| file_name[start..].starts_with(marker))
            .find(|&start| match self.mode {
                MarkerMatch::Substring => true,
                MarkerMatch::Delimited => is_delimited(file_name, start, marker),
            })
    }
}

fn is_delimited(file_name: &str, start: usize, marker: &str) -> bool {
    let is_boundary = |c: Option<char>| c.map_or(true, |c| !c.is_alphanumeric());
    let end = start + marker.len();

    let left = is_boundary(marker.chars().next()) || is_boundary(file_name[..start].chars().next_back());
    let right = is_boundary(marker.chars().next_back()) || is_boundary(file_name[end..].chars().next());
    left && right
}
