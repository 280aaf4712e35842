use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use super::{AppState, error_response};
use crate::catalog;
use crate::conversion::{self, ConversionRequest};
use crate::core::config::DefaultPair;
use crate::core::currency::ConversionResult;
use crate::core::error::ConvertError;

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

fn sanitize_code(code: &str) -> String {
    code.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_uppercase()
}

pub fn render_index(defaults: &DefaultPair) -> String {
    INDEX_TEMPLATE
        .replace("{{DEFAULT_FROM}}", &sanitize_code(&defaults.from))
        .replace("{{DEFAULT_TO}}", &sanitize_code(&defaults.to))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.defaults))
}

pub async fn currencies(State(state): State<AppState>) -> Response {
    match catalog::list_currencies(state.provider.as_ref()).await {
        Ok(currencies) => Json(currencies).into_response(),
        Err(e) => {
            error!(error = ?e, "Error fetching currencies");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch currencies")
        }
    }
}

/// The body is parsed by hand so that malformed JSON reports the generic
/// conversion failure instead of an extractor rejection.
pub async fn convert(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConversionResult>, ConvertError> {
    let request: ConversionRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Unreadable conversion request");
        ConvertError::Unexpected
    })?;

    conversion::convert(state.provider.as_ref(), &request)
        .await
        .map(Json)
}
