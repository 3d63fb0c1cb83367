use std::path::PathBuf;

use serde::Serialize;

/// Identity of a biological sample, derived from file names.
///
/// Keys order lexicographically, which fixes the row order of a samplesheet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SampleKey(pub String);

impl SampleKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of an unpaired file: the file name up to its first dot.
    #[must_use]
    pub fn from_unpaired_name(file_name: &str) -> Self {
        let end = file_name.find('.').unwrap_or(file_name.len());
        Self::new(&file_name[..end])
    }
}

impl std::fmt::Display for SampleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets maps keyed by `SampleKey` be queried with a `&str` prefix
impl std::borrow::Borrow<str> for SampleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SampleKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Category of a file, inferred from its (decompressed) extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// FASTQ reads: paired-end mates, single-end or long reads
    Read,
    /// FASTA assemblies
    Assembly,
    /// Anything else; skipped with a warning
    Unrecognized,
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Assembly => write!(f, "assembly"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// A file seen during the directory scan together with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub category: FileCategory,
}

impl ClassifiedFile {
    pub fn new(path: impl Into<PathBuf>, category: FileCategory) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }
}
