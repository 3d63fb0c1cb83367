use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::context::RunContext;
use crate::core::types::SampleKey;
use crate::grouping::markers::MateMarkers;
use crate::scan::classifier::ScanResult;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GroupingError {
    #[error(
        "An uneven number of reads was identified for sample '{sample}': {mate1} mate-1 file(s), {mate2} mate-2 file(s)"
    )]
    PairingMismatch {
        sample: SampleKey,
        mate1: usize,
        mate2: usize,
    },
}

/// Mate files of one sample, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatePaths {
    pub mate1: Vec<PathBuf>,
    pub mate2: Vec<PathBuf>,
}

impl MatePaths {
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.mate1.len() == self.mate2.len()
    }

    /// Mates paired positionally: the i-th mate-1 file with the i-th mate-2 file
    pub fn pairs(&self) -> impl Iterator<Item = (&PathBuf, &PathBuf)> {
        self.mate1.iter().zip(self.mate2.iter())
    }
}

/// Paired-end reads by sample
pub type PairedGroup = BTreeMap<SampleKey, MatePaths>;

/// Unpaired files (single-end reads, long reads or assemblies) by sample
pub type SingleGroup = BTreeMap<SampleKey, Vec<PathBuf>>;

/// All groupings of one directory scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleGroups {
    pub paired: PairedGroup,
    /// Unmarked reads, treated as long reads when assembling
    pub single: SingleGroup,
    pub assemblies: SingleGroup,
}

/// Groups classified files by sample key using the configured mate markers
pub struct GroupingEngine<'a> {
    markers: &'a MateMarkers,
    ctx: &'a RunContext,
}

impl<'a> GroupingEngine<'a> {
    #[must_use]
    pub fn new(markers: &'a MateMarkers, ctx: &'a RunContext) -> Self {
        Self { markers, ctx }
    }

    /// Build every grouping for a scan.
    ///
    /// An empty scan is logged as an error but still yields empty groupings;
    /// whether an empty samplesheet is acceptable is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns `GroupingError::PairingMismatch` if any sample has unequal
    /// mate counts.
    pub fn group(&self, scan: &ScanResult) -> Result<SampleGroups, GroupingError> {
        let mut groups = SampleGroups::default();

        if !scan.reads.is_empty() {
            groups.paired = self.paired_reads(&scan.reads)?;
            groups.single = self.unpaired(&scan.reads);
        }
        if !scan.assemblies.is_empty() {
            groups.assemblies = self.unpaired(&scan.assemblies);
        }
        if scan.is_empty() {
            let _guard = self.ctx.enter();
            error!("No input files found for processing.");
        }

        Ok(groups)
    }

    /// Pair mate-1 and mate-2 reads by sample key.
    ///
    /// A mate-1 file's key is its name up to the last mate-1 marker; likewise
    /// for mate-2. Mate-2 files without a mate-1 counterpart are not paired
    /// (they are still seen by [`Self::unpaired`] over the same input).
    ///
    /// # Errors
    ///
    /// Returns `GroupingError::PairingMismatch` naming the first sample, in
    /// key order, whose mate-1 and mate-2 counts differ.
    pub fn paired_reads(&self, reads: &[PathBuf]) -> Result<PairedGroup, GroupingError> {
        let _guard = self.ctx.enter();
        let mut paired = PairedGroup::new();

        for (path, name) in named(reads) {
            if let Some(prefix) = self.markers.mate1_prefix(name) {
                paired
                    .entry(SampleKey::new(prefix))
                    .or_default()
                    .mate1
                    .push(path.to_path_buf());
            }
        }

        for (path, name) in named(reads) {
            let Some(prefix) = self.markers.mate2_prefix(name) else {
                continue;
            };
            match paired.get_mut(prefix) {
                Some(mates) => mates.mate2.push(path.to_path_buf()),
                None => debug!("No mate-1 reads for {}, not pairing it", path.display()),
            }
        }

        if let Some((sample, mates)) = paired.iter().find(|(_, m)| !m.is_balanced()) {
            error!(
                "An un-even number of reads was identified for sample: {}",
                sample
            );
            return Err(GroupingError::PairingMismatch {
                sample: sample.clone(),
                mate1: mates.mate1.len(),
                mate2: mates.mate2.len(),
            });
        }

        info!("Paired reads found for {} sample(s)", paired.len());
        Ok(paired)
    }

    /// Group files carrying neither mate marker by the name before their first dot.
    ///
    /// Used for single-end/long reads and for assemblies alike.
    #[must_use]
    pub fn unpaired(&self, paths: &[PathBuf]) -> SingleGroup {
        let _guard = self.ctx.enter();
        let mut group = SingleGroup::new();

        for (path, name) in named(paths) {
            if self.markers.is_marked(name) {
                continue;
            }
            group
                .entry(SampleKey::from_unpaired_name(name))
                .or_default()
                .push(path.to_path_buf());
        }

        debug!("Grouped {} unpaired file(s) into {} sample(s)", paths.len(), group.len());
        group
    }
}

/// Paths paired with their UTF-8 file names; others are skipped with a warning
fn named(paths: &[PathBuf]) -> impl Iterator<Item = (&Path, &str)> {
    paths.iter().filter_map(|path| {
        let name = path.file_name().and_then(OsStr::to_str);
        if name.is_none() {
            warn!("Skipping file without a UTF-8 file name: {}", path.display());
        }
        name.map(|name| (path.as_path(), name))
    })
}
