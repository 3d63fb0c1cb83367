use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::types::SampleKey;

/// Column names of a samplesheet, in output order
pub const SAMPLESHEET_COLUMNS: [&str; 5] = ["sample", "fastq_1", "fastq_2", "long_reads", "assembly"];

/// One record of the samplesheet.
///
/// Field names match [`SAMPLESHEET_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRow {
    pub sample: SampleKey,
    pub fastq_1: Option<PathBuf>,
    pub fastq_2: Option<PathBuf>,
    pub long_reads: Option<PathBuf>,
    pub assembly: Option<PathBuf>,
}

impl SampleRow {
    /// A row with no input files yet
    pub fn new(sample: SampleKey) -> Self {
        Self {
            sample,
            fastq_1: None,
            fastq_2: None,
            long_reads: None,
            assembly: None,
        }
    }

    pub fn paired(sample: SampleKey, fastq_1: PathBuf, fastq_2: PathBuf) -> Self {
        Self {
            fastq_1: Some(fastq_1),
            fastq_2: Some(fastq_2),
            ..Self::new(sample)
        }
    }

    pub fn long_reads(sample: SampleKey, long_reads: PathBuf) -> Self {
        Self {
            long_reads: Some(long_reads),
            ..Self::new(sample)
        }
    }

    pub fn assembly(sample: SampleKey, assembly: PathBuf) -> Self {
        Self {
            assembly: Some(assembly),
            ..Self::new(sample)
        }
    }

    /// A row is meaningful once at least one input file is set
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.fastq_1.is_some()
            || self.fastq_2.is_some()
            || self.long_reads.is_some()
            || self.assembly.is_some()
    }
}

/// All samplesheet rows, grouped by sample key in key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Samplesheet {
    samples: BTreeMap<SampleKey, Vec<SampleRow>>,
}

impl Samplesheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of `key`, created empty if the key is new
    pub fn rows_mut(&mut self, key: &SampleKey) -> &mut Vec<SampleRow> {
        self.samples.entry(key.clone()).or_default()
    }

    #[must_use]
    pub fn get(&self, key: &SampleKey) -> Option<&[SampleRow]> {
        self.samples.get(key).map(Vec::as_slice)
    }

    pub fn sample_keys(&self) -> impl Iterator<Item = &SampleKey> {
        self.samples.keys()
    }

    /// All rows, in sample key order then row order
    pub fn rows(&self) -> impl Iterator<Item = &SampleRow> {
        self.samples.values().flatten()
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }
}
