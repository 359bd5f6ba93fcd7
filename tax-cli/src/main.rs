use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_cli::app::App;
use tax_cli::cli::Cli;
use tax_cli::logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;
    debug!(?cli, "starting");

    let app = App::from_cli(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&cli.command, &mut out)?;
    out.flush().context("Failed to write output")?;

    Ok(())
}
