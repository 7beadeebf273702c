//! AVJ CLI - Command-line tool for Attribute-Value JSON decoding
//!
//! Reads one attribute-value encoded JSON document, decodes every field whose
//! key carries a `_<type>_<digits>` suffix, and prints the result as a
//! one-element JSON array.

use avj_io::{execute_decode, DecodeOptions, DecodeRequest, InputSource, Limits, OutputSink};
use clap::{ArgAction, Parser};
use std::error::Error;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const MISSING_INPUT_MESSAGE: &str = "Error: no input file specified.";

#[derive(Parser, Debug)]
#[command(name = "avj")]
#[command(about = "Decode attribute-value encoded JSON into plain JSON")]
#[command(version)]
struct Cli {
    /// Input file (attribute-value encoded JSON object)
    input: Option<PathBuf>,
    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit compact single-line JSON instead of two-space indentation
    #[arg(long)]
    compact: bool,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let Some(input) = cli.input else {
        println!("{MISSING_INPUT_MESSAGE}");
        return Ok(());
    };

    debug!(input = %input.display(), compact = cli.compact, "starting decode");
    let output = match cli.output {
        Some(path) => OutputSink::Path(path),
        None => OutputSink::Stdout,
    };

    let request = DecodeRequest {
        input: InputSource::Path(input),
        output,
        options: DecodeOptions {
            limits: Limits::default(),
            pretty: !cli.compact,
        },
    };

    execute_decode(request)?;
    Ok(())
}

fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
