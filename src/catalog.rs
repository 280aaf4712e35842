//! Builds the list of selectable currencies from the upstream name table.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::core::currency::{Currency, RateProvider};
use crate::core::symbols::currency_symbol;

pub async fn list_currencies(provider: &dyn RateProvider) -> Result<Vec<Currency>> {
    let names = provider
        .fetch_currency_names()
        .await
        .context("Failed to fetch currencies")?;

    let currencies: Vec<Currency> = names
        .into_iter()
        .map(|(code, name)| build_currency(&code, name))
        .collect();
    debug!(count = currencies.len(), "Built currency catalog");
    Ok(currencies)
}

fn build_currency(code: &str, name: Value) -> Currency {
    let code = code.to_uppercase();
    let name = match name {
        Value::String(name) => name,
        _ => code.clone(),
    };
    Currency {
        symbol: currency_symbol(&code),
        code,
        name,
    }
}
