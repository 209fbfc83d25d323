//! Per-request failures.
//!
//! Each variant becomes a `500 Internal Server Error` with a short plain-text
//! body. The underlying database error is logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The listing query itself failed.
    #[error("query: {0}")]
    Query(#[source] DbErr),
    /// A returned row could not be decoded.
    #[error("scan: {0}")]
    Scan(#[source] DbErr),
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Query(_) => "db error",
            ApiError::Scan(_) => "scan error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.public_message()).into_response()
    }
}
