use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use verifguide::cli::{self, Cli};
use verifguide::config::GuideConfig;
use verifguide::tui::runner;

fn init_tracing(writer: BoxMakeWriter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("verifguide=info".parse()?),
        )
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

/// Log file if one is configured, otherwise discard: the terminal UI owns the screen.
fn tui_log_writer(path: Option<&Path>) -> Result<BoxMakeWriter> {
    let Some(path) = path else {
        return Ok(BoxMakeWriter::new(std::io::sink));
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    Ok(BoxMakeWriter::new(Mutex::new(file)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        init_tracing(BoxMakeWriter::new(std::io::stderr))?;
        debug!(?command, "non-interactive");
        let stdout = std::io::stdout();
        cli::execute_piped(command, &mut stdout.lock())?;
        return Ok(());
    }

    let mut config = GuideConfig::load(cli.config.as_deref());
    if let Some(tab) = cli.tab {
        config.start_tab = Some(tab);
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }

    init_tracing(tui_log_writer(config.log_file.as_deref())?)?;
    info!(?config, "verifguide starting");

    runner::run_tui(&config).await
}
