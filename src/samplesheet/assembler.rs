use std::path::PathBuf;

use tracing::{info, warn};

use crate::core::context::RunContext;
use crate::core::row::{SampleRow, Samplesheet};
use crate::core::types::SampleKey;
use crate::grouping::engine::{PairedGroup, SingleGroup};

/// Field of a row filled in by an unpaired grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnpairedField {
    LongReads,
    Assembly,
}

impl UnpairedField {
    fn set(self, row: &mut SampleRow, path: PathBuf) {
        match self {
            Self::LongReads => row.long_reads = Some(path),
            Self::Assembly => row.assembly = Some(path),
        }
    }

    fn new_row(self, sample: SampleKey, path: PathBuf) -> SampleRow {
        match self {
            Self::LongReads => SampleRow::long_reads(sample, path),
            Self::Assembly => SampleRow::assembly(sample, path),
        }
    }
}

/// Merge paired reads, long reads and assemblies into one samplesheet.
///
/// Rows are built in three passes:
///
/// 1. one row per mate pair, mate-1 and mate-2 matched by position
/// 2. the i-th long read of a sample fills `long_reads` of the sample's i-th
///    row if that row exists, otherwise it gets a row of its own
/// 3. assemblies are merged the same way into the `assembly` field
///
/// A sample with two mate pairs and one long read thus yields two rows, the
/// first carrying the long read; a sample with one pair and two long reads
/// yields two rows, the second carrying only a long read.
#[must_use]
pub fn assemble(
    paired: &PairedGroup,
    single: &SingleGroup,
    assemblies: &SingleGroup,
    ctx: &RunContext,
) -> Samplesheet {
    let _guard = ctx.enter();
    let mut sheet = Samplesheet::new();

    for (sample, mates) in paired {
        let rows = sheet.rows_mut(sample);
        for (fastq_1, fastq_2) in mates.pairs() {
            rows.push(SampleRow::paired(
                sample.clone(),
                fastq_1.clone(),
                fastq_2.clone(),
            ));
        }
    }

    merge_unpaired(&mut sheet, single, UnpairedField::LongReads);
    merge_unpaired(&mut sheet, assemblies, UnpairedField::Assembly);

    info!(
        "Assembled {} row(s) for {} sample(s)",
        sheet.row_count(),
        sheet.len()
    );
    sheet
}

fn merge_unpaired(sheet: &mut Samplesheet, group: &SingleGroup, field: UnpairedField) {
    for (sample, paths) in group {
        let rows = sheet.rows_mut(sample);
        let existing = rows.len();
        for (idx, path) in paths.iter().enumerate() {
            match rows.get_mut(idx) {
                Some(row) => field.set(row, path.clone()),
                None => rows.push(field.new_row(sample.clone(), path.clone())),
            }
        }
        if existing > 0 && existing != paths.len() {
            warn!(
                "Sample {sample} has {existing} existing row(s) but {} {field:?} file(s); rows were aligned by position",
                paths.len()
            );
        }
    }
}
