//! Interactive build-and-analyze run

use std::io;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::session::{Modes, Session};
use crate::Cli;

/// Combine config file defaults with command-line flags
pub fn resolve_modes(cli: &Cli, config: &Config) -> Modes {
    Modes {
        basic: cli.basic || config.basic,
        debug: cli.debug || config.debug,
        quiet: cli.quiet || config.quiet,
    }
}

/// A `--format` flag overrides the config file
pub fn resolve_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.format.unwrap_or(config.format)
}

pub fn run(modes: Modes, format: OutputFormat) -> anyhow::Result<()> {
    tracing::debug!("Starting session with {:?}, format {:?}", modes, format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), modes, format);
    session.run()?;

    tracing::debug!(
        "Session finished with {} organisms",
        session.web().organism_count()
    );
    Ok(())
}
