use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ngs_samplesheet::cli;
use ngs_samplesheet::error::{SamplesheetError, EXIT_FAILURE};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("ngs_samplesheet=debug,info")
    } else {
        EnvFilter::new("ngs_samplesheet=warn")
    };

    // Samplesheets may go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        cli::Commands::Samplesheet(args) => cli::samplesheet::run(args, cli.format, cli.verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<SamplesheetError>()
                .map_or(EXIT_FAILURE, SamplesheetError::exit_code);
            ExitCode::from(code)
        }
    }
}
