pub mod catalog;
pub mod cli;
pub mod conversion;
pub mod core;
pub mod form;
pub mod providers;
pub mod web;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::currency::RateProvider;
use crate::form::LocalBackend;
use crate::providers::CurrencyApiProvider;

pub enum AppCommand {
    Serve {
        bind: Option<String>,
    },
    Currencies,
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    match config_path {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    debug!("Loaded config: {config:#?}");

    let provider: Arc<dyn RateProvider> =
        Arc::new(CurrencyApiProvider::new(config.currency_api_url())?);

    match command {
        AppCommand::Serve { bind } => {
            info!("Currency converter starting...");
            let bind = bind.unwrap_or_else(|| config.server.bind_address.clone());
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("Failed to bind {bind}"))?;
            let state = web::AppState {
                provider,
                defaults: config.defaults.clone(),
            };
            web::serve(listener, state).await
        }
        AppCommand::Currencies => cli::currencies::run(provider.as_ref()).await,
        AppCommand::Convert { amount, from, to } => {
            let backend = LocalBackend::new(provider);
            let form = cli::convert::run(
                &backend,
                &config.defaults,
                cli::convert::ConvertArgs {
                    amount: &amount,
                    from: from.as_deref(),
                    to: to.as_deref(),
                },
            )
            .await?;
            cli::convert::render(&form)
        }
    }
}
