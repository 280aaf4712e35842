//! Validates a conversion request and prices it against upstream rates.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::core::currency::{ConversionResult, RateProvider};
use crate::core::error::ConvertError;

/// Amount as sent by a client: a JSON number, or a number written as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<Amount>,
}

impl ConversionRequest {
    pub fn new(from: &str, to: &str, amount: impl Into<Amount>) -> Self {
        ConversionRequest {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            amount: Some(amount.into()),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// `amount * rate` rounded to cents, midpoints away from zero.
pub fn converted_amount(amount: f64, rate: f64) -> f64 {
    let exact = Decimal::from_f64(amount)
        .zip(Decimal::from_f64(rate))
        .and_then(|(a, r)| a.checked_mul(r))
        .map(|product| product.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_f64());

    // Out of Decimal range; f64::round also rounds half away from zero.
    exact.unwrap_or_else(|| (amount * rate * 100.0).round() / 100.0)
}

#[instrument(name = "Convert", skip(provider, request), fields(from = ?request.from, to = ?request.to))]
pub async fn convert(
    provider: &dyn RateProvider,
    request: &ConversionRequest,
) -> Result<ConversionResult, ConvertError> {
    let (Some(from), Some(to), Some(amount)) = (
        non_empty(&request.from),
        non_empty(&request.to),
        request.amount.as_ref(),
    ) else {
        return Err(ConvertError::MissingParameters);
    };

    let amount = amount
        .value()
        .filter(|a| *a > 0.0)
        .ok_or(ConvertError::InvalidAmount)?;

    let rates = provider
        .fetch_rates(&from.to_lowercase())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch exchange rate");
            ConvertError::RateFetchFailed
        })?;

    let rate = rates
        .get(&to.to_lowercase())
        .and_then(Value::as_f64)
        .filter(|r| *r > 0.0)
        .ok_or_else(|| ConvertError::RateNotFound { to: to.to_string() })?;

    let converted_amount = converted_amount(amount, rate);
    if !converted_amount.is_finite() {
        error!(amount, rate, "Conversion overflowed");
        return Err(ConvertError::Unexpected);
    }
    debug!(amount, rate, converted_amount, "Converted");

    Ok(ConversionResult {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        rate,
        converted_amount,
    })
}
