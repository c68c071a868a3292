//! # The Cosmic Blog Entry Point

use anyhow::{bail, Result};
use cosmicblog::cmd_args::CommandLineArgs;
use cosmicblog::config::{self, BlogSettings};
use cosmicblog::{AppController, TerminalEventStream, TerminalRenderStream};
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("cosmicblog needs an interactive terminal");
    }
    init_tracing_subscriber(cmd_args.verbose())?;

    let settings = BlogSettings::resolve(&cmd_args)?;
    tracing::info!("Starting with {:?}", settings);

    let mut app = AppController::with_io_streams(
        settings,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    // run() restores the terminal before any error reaches us
    app.run().await?;

    println!("👋 Thanks for visiting The Cosmic Blog!");
    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let log_path = config::expand_path(&config::get_log_path())?;
    let log_file = config::open_log_file(&log_path)?;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(config::LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
    Ok(())
}
