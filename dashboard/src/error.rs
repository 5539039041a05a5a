//! Dashboard-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("{0}")]
    SharedError(#[from] SharedError),

    #[error("Asset not found: {path}")]
    AssetNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Unknown download: {id}")]
    UnknownDownload { id: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Response building error: {0}")]
    ResponseError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DashboardError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::AssetNotFound { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// HTTP status this error maps to when it reaches a handler boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            DashboardError::SharedError(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            DashboardError::AssetNotFound { .. } | DashboardError::UnknownDownload { .. } => StatusCode::NOT_FOUND,
            DashboardError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let out_of_range = DashboardError::from(SharedError::out_of_range("acres", 0, 1, 1000));
        assert_eq!(out_of_range.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(DashboardError::invalid_request("missing").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(DashboardError::not_found("x.pdf").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            DashboardError::UnknownDownload { id: "nope".into() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DashboardError::AccessDenied { path: "../etc".into() }.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            DashboardError::ServerStartup("bind failed".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let bad_config = DashboardError::from(SharedError::InvalidConfig {
            field: "log_level".into(),
            value: "loud".into(),
        });
        assert_eq!(bad_config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_out_of_range_message_passes_through() {
        let err = DashboardError::from(SharedError::out_of_range("children", 60_000_000, 0, 50_000_000));
        assert_eq!(err.to_string(), "children must be between 0 and 50000000, got 60000000");
    }
}
