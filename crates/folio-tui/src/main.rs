//! `folio`: terminal front end for a personal portfolio.
//!
//! Renders the hero, about, experience, projects, skills and contact
//! sections from the content store through `folio-core`'s
//! [`SyncStream`](folio_core::SyncStream)s. Screens are navigable via number
//! keys (1-6). With `--admin` every section also offers create and delete
//! forms, and the contact screen shows the message inbox.
//!
//! Logs are written to a file (default `/tmp/folio.log`) to avoid corrupting
//! the terminal UI.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use folio_config::Config;
use folio_core::Portfolio;

use crate::app::App;

/// Browse (and with --admin, manage) a portfolio served by a content store.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Content store base URL (e.g., http://localhost:8000)
    #[arg(short = 'u', long, env = "FOLIO_API_URL")]
    api_url: Option<String>,

    /// Enable create/delete forms and the message inbox
    #[arg(short = 'a', long)]
    admin: bool,

    /// Config file (defaults to the platform config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/folio.log)
    #[arg(long, default_value = "/tmp/folio.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Nothing may log to stdout/stderr while the
/// terminal is in raw mode. The returned guard flushes logs on drop.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "folio={log_level},folio_tui={log_level},folio_core={log_level},folio_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("folio.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Priority: CLI flags > environment > config file > defaults.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => folio_config::load_config_from(path),
        None => folio_config::load_config(),
    }
    .wrap_err("failed to load configuration")?;

    if let Some(url) = &cli.api_url {
        config.api.url.clone_from(url);
    }
    if cli.admin {
        config.admin = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal enters raw mode
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let config = resolve_config(&cli)?;
    let portfolio_config = config
        .to_portfolio_config()
        .wrap_err("invalid content store settings")?;

    info!(
        url = %portfolio_config.api_url,
        admin = portfolio_config.admin,
        "starting folio"
    );

    let portfolio = Portfolio::new(portfolio_config)?;
    let mut app = App::new(portfolio, config.owner);
    app.run().await?;

    Ok(())
}
