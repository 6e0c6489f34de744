//! Implementation of the sledger-check command.
//!
//! Runs the full parse-and-apply pipeline but reports diagnostics only:
//! a dry run whose result is the exit code.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::cmd::process::OutputFormat;
use crate::driver;
use crate::report::{self, JsonOutput};

/// Validate an instruction file and report errors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The instruction file to check (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Show verbose output including per-instruction progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output (just use exit code)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    let start = std::time::Instant::now();

    let (source, path) = super::read_source(args.file.as_deref())?;
    let run = driver::process_source(&source, args.verbose && !args.quiet);

    match args.format {
        OutputFormat::Json => {
            let output = JsonOutput::from_run(&run, false);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text => {
            if !args.quiet {
                report::report_diagnostics(&run.diagnostics, &path, &source, &mut stdout)?;

                if args.verbose {
                    writeln!(
                        stdout,
                        "Checked {} instructions in {:.2}ms\n",
                        run.instructions,
                        start.elapsed().as_secs_f64() * 1000.0
                    )?;
                }
                report::print_summary(run.error_count(), run.warning_count(), &mut stdout)?;
            }
        }
    }

    if run.error_count() > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Main entry point for the check command.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    }

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
