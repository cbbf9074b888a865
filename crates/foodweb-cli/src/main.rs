//! Foodweb CLI - Build, modify and analyze a food web from standard input

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod input;
mod output;
mod session;

use commands::run;
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "foodweb")]
#[command(author, version, about = "Build, modify and analyze a food web")]
pub struct Cli {
    /// Basic mode: analyze the initial web and exit
    #[arg(short, long)]
    pub basic: bool,

    /// Debug mode: print the web after every change
    #[arg(short, long)]
    pub debug: bool,

    /// Quiet mode: suppress prompts
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format for webs and reports
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("Invalid command-line argument. Terminating program...");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Default log filter for a verbosity count and the resolved quiet mode
fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Modes come from flags and the config file, so load it before logging
    let config = Config::load(cli.config.as_deref())?;
    let modes = run::resolve_modes(&cli, &config);
    let format = run::resolve_format(&cli, &config);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter(cli.verbose, modes.quiet).into()),
        )
        .init();

    tracing::debug!("Starting foodweb CLI with config {:?}", config);
    run::run(modes, format)
}
