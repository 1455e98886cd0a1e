pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{ConversionFlow, HistoryLog, Notifier, QuoteStore};
use crate::providers::dolar_api::DolarApiProvider;
use crate::providers::fallback::FallbackQuoteProvider;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert { amount: String, direction: String },
    History,
    Quote,
}

/// Wires the conversion flow against the configured remote source and the
/// on-disk store.
pub fn build_flow(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Result<ConversionFlow> {
    let store = store::open_store(config)?;

    let dolarapi = &config.providers.dolarapi;
    let remote = Arc::new(DolarApiProvider::new(&dolarapi.base_url, dolarapi.timeout()));
    let quotes = FallbackQuoteProvider::new(
        remote,
        QuoteStore::new(Arc::clone(&store)),
        Arc::clone(&notifier),
    );

    Ok(ConversionFlow::new(quotes, HistoryLog::new(store), notifier))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cambio starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let spinner = cli::ui::new_spinner()?;
    let notifier = Arc::new(cli::ui::ConsoleNotifier::new(spinner.clone()));
    let flow = build_flow(&config, notifier)?;

    match command {
        AppCommand::Convert { amount, direction } => {
            cli::convert::run(&flow, &spinner, &amount, &direction).await
        }
        AppCommand::History => cli::history::run(&flow).await,
        AppCommand::Quote => cli::quote::run(&flow, &spinner).await,
    }
}
