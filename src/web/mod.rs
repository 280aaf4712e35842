//! HTTP surface: the converter page plus the JSON endpoints it calls.

pub mod handlers;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::config::DefaultPair;
use crate::core::currency::RateProvider;
use crate::core::error::{ConvertError, ErrorKind};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RateProvider>,
    pub defaults: DefaultPair,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Upstream | ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/currencies", get(handlers::currencies))
        .route("/convert", post(handlers::convert))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let address = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Currency converter listening on http://{}", address);

    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")
}
