use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::config::ExtensionConfig;
use crate::core::context::RunContext;
use crate::error::SamplesheetError;
use crate::grouping::markers::{MarkerMatch, MateMarkers};
use crate::samplesheet::build_samplesheet;
use crate::samplesheet::writer::{write_samplesheet, write_samplesheet_to_path};

/// How mate markers are matched in file names
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum MarkerMode {
    /// Marker must not run into letters or digits on either side
    #[default]
    Delimited,
    /// Marker may appear anywhere in the file name
    Substring,
}

impl From<MarkerMode> for MarkerMatch {
    fn from(mode: MarkerMode) -> Self {
        match mode {
            MarkerMode::Delimited => Self::Delimited,
            MarkerMode::Substring => Self::Substring,
        }
    }
}

#[derive(Args)]
pub struct SamplesheetArgs {
    /// Directory containing FASTQ reads and FASTA assemblies
    #[arg(required = true)]
    pub input: PathBuf,

    /// Marker identifying first-mate reads (e.g. _R1_)
    #[arg(short = '1', long, default_value = "_R1_")]
    pub mate1: String,

    /// Marker identifying second-mate reads (e.g. _R2_)
    #[arg(short = '2', long, default_value = "_R2_")]
    pub mate2: String,

    /// How mate markers are matched
    #[arg(long, value_enum, default_value = "delimited")]
    pub marker_match: MarkerMode,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

/// Execute samplesheet subcommand
///
/// # Errors
///
/// Returns a `SamplesheetError` if the markers are invalid, the directory
/// cannot be classified, paired reads do not line up, or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SamplesheetArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let markers = MateMarkers::new(&args.mate1, &args.mate2)
        .map_err(SamplesheetError::from)?
        .with_mode(args.marker_match.into());

    if verbose {
        eprintln!(
            "Mate markers: '{}' / '{}' ({:?} matching)",
            markers.mate1(),
            markers.mate2(),
            args.marker_match
        );
    }

    let ctx = RunContext::for_directory(&args.input);
    let sheet = build_samplesheet(&args.input, &markers, &ExtensionConfig::default(), &ctx)?;

    if verbose {
        eprintln!(
            "Assembled {} rows for {} samples",
            sheet.row_count(),
            sheet.len()
        );
    }

    match &args.output {
        Some(path) => write_samplesheet_to_path(&sheet, format.into(), path, args.force)
            .map_err(SamplesheetError::from)?,
        None => write_samplesheet(&sheet, format.into(), std::io::stdout().lock())
            .map_err(SamplesheetError::from)?,
    }

    Ok(())
}
