use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::progress::GamificationService;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub gamification: Arc<GamificationService>,
}

impl AppState {
    pub fn new(gamification: Arc<GamificationService>) -> Self {
        Self { gamification }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Repository(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Repository error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// `round(min(part / whole, 1) * 100)`, rounding halves up. An empty
/// `whole` reports 0.
pub(crate) fn progress_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    // widened so point spans near u64::MAX cannot overflow
    let part = u128::from(part.min(whole));
    let whole = u128::from(whole);
    ((part * 200 + whole) / (whole * 2)) as u8
}
