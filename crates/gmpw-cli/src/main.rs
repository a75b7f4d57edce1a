mod analysis;

use arboard::Clipboard;
use clap::{CommandFactory, Parser, ValueEnum};
use gmpw::{Allocation, Password, Request};
use human_panic::setup_panic;
use rand::prelude::*;
use serde::Serialize;
use term_table::TableStyle;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::analysis::SecurityAnalysis;

#[derive(Parser, Debug)]
#[command(name = "gmpw")]
#[command(version)]
#[command(about = "Generate my password: a random mix of digits and letters")]
#[command(
    long_about = "gmpw generates a random password of digits, upper and lower case letters. \
Counts that are not given are split at random, and visually ambiguous characters (oO0l1) are avoided by default."
)]
#[command(after_help = "Usage: gmpw -n10")]
struct Cli {
    /// Length of password, must between 3-20
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    length: i64,

    /// Number of digits
    #[arg(short, long, allow_negative_numbers = true)]
    digit: Option<i64>,

    /// Number of upper case letters
    #[arg(short, long, allow_negative_numbers = true)]
    upper: Option<i64>,

    /// Number of lower case letters
    #[arg(short, long, allow_negative_numbers = true)]
    lower: Option<i64>,

    /// Avoid chars 'oO0l1' (true or false)
    #[arg(short, long, default_value = "true")]
    avoid_ambiguous: String,

    /// Output format for the generated password
    #[arg(short, long, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Show a security analysis of the generated password
    #[arg(long)]
    analyze: bool,

    /// Copy the generated password to the clipboard
    #[arg(short, long)]
    clipboard: bool,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generate(#[from] gmpw::Error),
    #[error("unable to analyze password's safety: {0}")]
    Analysis(String),
    #[error("unable to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct PasswordOutput<'a> {
    password: &'a str,
    allocation: Allocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<SecurityAnalysis>,
}

fn main() {
    setup_panic!();
    init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        // Rejected requests print the reason and the help text, then exit normally.
        Err(CliError::Generate(err)) => {
            debug!(%err, "request rejected");
            println!("{}", err);
            println!("{}", Cli::command().render_help());
        }
        Err(err) => {
            eprintln!("gmpw: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let request = Request {
        length: cli.length,
        digits: cli.digit,
        upper: cli.upper,
        lower: cli.lower,
        avoid_ambiguous: gmpw::parse_switch("avoid-ambiguous", &cli.avoid_ambiguous)?,
    };

    // A fixed seed makes the output reproducible.
    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };

    let generated = gmpw::generate(&mut rng, &request)?;

    if cli.clipboard {
        copy_to_clipboard(&generated.password);
    }

    let analysis = if cli.analyze {
        let analysis = SecurityAnalysis::new(&generated.password)
            .map_err(|err| CliError::Analysis(err.to_string()))?;
        Some(analysis)
    } else {
        None
    };

    match cli.output {
        OutputFormat::Text => print_text(&generated, analysis.as_ref()),
        OutputFormat::Json => {
            let output = PasswordOutput {
                password: &generated.password,
                allocation: generated.allocation,
                analysis,
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    Ok(())
}

fn print_text(generated: &Password, analysis: Option<&SecurityAnalysis>) {
    println!("{}", generated.allocation);
    println!("{}", generated.password);
    if let Some(analysis) = analysis {
        analysis.display_report(TableStyle::extended(), 80);
    }
}

fn copy_to_clipboard(password: &str) {
    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(password));
    match copied {
        Ok(()) => debug!("password copied to clipboard"),
        Err(err) => warn!(%err, "unable to set clipboard contents"),
    }
}
