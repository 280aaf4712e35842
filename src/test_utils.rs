use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::currency::{CurrencyNames, RateProvider, RateTable};

/// In-memory provider that records every rate lookup it receives.
#[derive(Default)]
pub struct StaticProvider {
    names: Option<CurrencyNames>,
    rates: Option<HashMap<String, RateTable>>,
    requested: Mutex<Vec<String>>,
}

fn as_object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

impl StaticProvider {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_names(names: Value) -> Self {
        Self {
            names: Some(as_object(names)),
            ..Self::default()
        }
    }

    pub fn with_rates(base: &str, rates: Value) -> Self {
        Self::default().and_rates(base, rates)
    }

    pub fn and_rates(mut self, base: &str, rates: Value) -> Self {
        self.rates
            .get_or_insert_with(HashMap::new)
            .insert(base.to_string(), as_object(rates));
        self
    }

    pub fn and_names(mut self, names: Value) -> Self {
        self.names = Some(as_object(names));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateProvider for StaticProvider {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        self.requested.lock().unwrap().push(base.to_string());
        let rates = self
            .rates
            .as_ref()
            .ok_or_else(|| anyhow!("HTTP error: 503 Service Unavailable"))?;
        Ok(rates.get(base).cloned().unwrap_or_default())
    }

    async fn fetch_currency_names(&self) -> Result<CurrencyNames> {
        self.names
            .clone()
            .ok_or_else(|| anyhow!("HTTP error: 503 Service Unavailable"))
    }
}
