//! Currency data types and the upstream rate abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream documents are objects keyed by arbitrary currency codes, so they
/// are kept as plain JSON maps and probed with explicit lookups.
pub type RateTable = Map<String, Value>;
pub type CurrencyNames = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub converted_amount: f64,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Rates for one unit of `base`, keyed by lower-cased target code.
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;

    /// Every supported currency code mapped to its display name, in upstream order.
    async fn fetch_currency_names(&self) -> Result<CurrencyNames>;
}
