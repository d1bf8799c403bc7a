// promptdeck - prompt template browser for the terminal
//
// Fetches a fixed list of template files and shows them as expandable
// cards with copy-to-clipboard.
//
// Architecture:
// - Catalog: the static, ordered resource list
// - Loader (reqwest): fetches each template sequentially, results flow
//   over an mpsc channel
// - TUI (ratatui): renders the cards and handles all interaction
// - Logging: tracing events captured in memory while the TUI is up

mod card;
mod catalog;
mod cli;
mod config;
mod events;
mod fetch;
mod logging;
mod preview;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use fetch::Fetcher;
use logging::{LogBuffer, TuiLogLayer};
use std::io::IsTerminal;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Capture logs in memory: stdout belongs to the TUI.
    // File logging is optional on top.
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, log_buffer.clone());

    // The deck renders into the terminal; without one there is nothing
    // to do and the feature quietly bows out.
    if !std::io::stdout().is_terminal() {
        tracing::debug!("stdout is not a terminal, nothing to render");
        return Ok(());
    }

    let catalog = catalog::resolve(config.resources.clone());
    tracing::info!(
        "Browsing {} templates from {}",
        catalog.len(),
        config.base_url
    );

    // Loader task: fetches templates one at a time, in catalog order.
    // The TUI starts with skeleton cards and fills them in as results
    // arrive over the channel.
    let (load_tx, load_rx) = mpsc::channel(64);
    let loader = tokio::spawn(fetch::run_loader(
        Fetcher::new(&config.base_url),
        catalog.clone(),
        load_tx,
    ));

    let result = tui::run_tui(catalog, load_rx, log_buffer, &config).await;

    // The session is over; an unfinished fetch has no card left to fill
    loader.abort();
    let _ = loader.await;

    tracing::info!("Shutdown complete");
    result
}

/// Initialize tracing: buffer capture always, rolling JSON files when
/// enabled. The returned guard must live as long as the program so file
/// logs flush.
///
/// Filter precedence: RUST_LOG env var > config file level > "info".
fn init_tracing(
    config: &Config,
    buffer: LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("promptdeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(buffer))
        .with(file_layer)
        .init();

    guard
}
