//! State of the converter form, independent of how it is drawn.
//!
//! The web page keeps the same state in its inline script; the CLI drives
//! this type directly.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::catalog;
use crate::conversion::{self, ConversionRequest};
use crate::core::config::DefaultPair;
use crate::core::currency::{ConversionResult, Currency, RateProvider};

pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load currencies";
pub const CONVERSION_FAILED_MESSAGE: &str = "Conversion failed";

/// What the form talks to for the catalog and for conversions.
#[async_trait]
pub trait ConverterBackend: Send + Sync {
    async fn currencies(&self) -> Result<Vec<Currency>>;
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult>;
}

/// Runs the catalog and conversion services in-process.
pub struct LocalBackend {
    provider: Arc<dyn RateProvider>,
}

impl LocalBackend {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ConverterBackend for LocalBackend {
    async fn currencies(&self) -> Result<Vec<Currency>> {
        catalog::list_currencies(self.provider.as_ref()).await
    }

    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        Ok(conversion::convert(self.provider.as_ref(), request).await?)
    }
}

/// Text shown for a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub source: String,
    pub target: String,
    pub rate: String,
}

/// Positive, finite amount typed by the user.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
}

#[derive(Debug, Clone)]
pub struct ConverterForm {
    currencies: Vec<Currency>,
    from: String,
    to: String,
    amount: String,
    result: Option<ConversionResult>,
    error: Option<String>,
    loading: bool,
}

impl ConverterForm {
    pub fn new(defaults: &DefaultPair) -> Self {
        ConverterForm {
            currencies: Vec::new(),
            from: defaults.from.clone(),
            to: defaults.to.clone(),
            amount: "1".to_string(),
            result: None,
            error: None,
            loading: false,
        }
    }

    pub async fn load_currencies(&mut self, backend: &dyn ConverterBackend) {
        match backend.currencies().await {
            Ok(currencies) => {
                debug!(count = currencies.len(), "Loaded currencies");
                self.currencies = currencies;
            }
            Err(e) => {
                error!(error = ?e, "Failed to load currencies");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
    }

    pub fn select_from(&mut self, code: &str) {
        self.from = code.to_string();
    }

    pub fn select_to(&mut self, code: &str) {
        self.to = code.to_string();
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub async fn submit(&mut self, backend: &dyn ConverterBackend) {
        let Some(amount) = parse_amount(&self.amount) else {
            self.error = Some(INVALID_AMOUNT_MESSAGE.to_string());
            return;
        };

        self.loading = true;
        self.error = None;

        let request = ConversionRequest::new(&self.from, &self.to, amount);
        match backend.convert(&request).await {
            Ok(result) => self.result = Some(result),
            Err(e) => {
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    CONVERSION_FAILED_MESSAGE.to_string()
                } else {
                    message
                });
                self.result = None;
            }
        }

        self.loading = false;
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn symbol_for(&self, code: &str) -> Option<&str> {
        self.currencies
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.symbol.as_str())
    }

    pub fn result_view(&self) -> Option<ResultView> {
        let result = self.result.as_ref()?;
        let from_symbol = self.symbol_for(&self.from).unwrap_or(&result.from);
        let to_symbol = self.symbol_for(&self.to).unwrap_or(&result.to);
        Some(ResultView {
            source: format!("{} {}", result.amount, from_symbol),
            target: format!("{} {}", result.converted_amount, to_symbol),
            rate: format!(
                "Exchange rate: 1 {} = {:.4} {}",
                result.from, result.rate, result.to
            ),
        })
    }
}
