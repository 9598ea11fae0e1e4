use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tuples_gen::{generate_with, parse_count, GeneratorOptions, InvocationStyle};

const AFTER_HELP: &str = "\
Example:
  tuples-cli 60 > macro.rs    Emit `all_the_tuples` for tuples of 1 to 60 elements.

Set RUST_LOG=debug to trace generation on stderr.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// `$mac! { 1 T }`
    Brace,
    /// `$mac!( 1 T);`
    Call,
}

impl From<Style> for InvocationStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Brace => InvocationStyle::Brace,
            Style::Call => InvocationStyle::Call,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tuples-cli",
    version,
    about = "Generate the all_the_tuples macro.",
    long_about = "Print a macro_rules! definition that invokes a macro once per tuple arity, \
                  from 1 up to N, in paired and single form.",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Largest tuple arity to generate (a positive integer).
    #[arg(value_name = "N", allow_negative_numbers = true)]
    count: String,

    /// How each arity invokes the caller's macro.
    #[arg(long, value_enum, default_value_t = Style::Brace)]
    style: Style,

    /// Name of the generated macro.
    #[arg(long, value_name = "IDENT", default_value = tuples_gen::DEFAULT_MACRO_NAME)]
    name: String,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(());
            }
            _ => {
                // Usage problems share the exit status of invalid counts.
                err.print()?;
                std::process::exit(1);
            }
        },
    };

    run(cli)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let max = parse_count(&cli.count)?;
    let options = GeneratorOptions::default()
        .with_style(cli.style.into())
        .with_macro_name(cli.name);
    options.validate()?;

    debug!(?options, "generator options");
    let document = generate_with(max, &options);
    info!(max = max.get(), bytes = document.len(), "generated macro");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}").context("failed to write generated macro to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
