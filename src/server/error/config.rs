use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration errors raised by `Config::from_env`.
///
/// `DATABASE_URL` and `MONGODB_URL` must be set and non-blank. `BIND_ADDRESS` must parse as a
/// socket address when given; `MONGODB_DATABASE` falls back to its default.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// `DATABASE_URL` or `MONGODB_URL` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but unusable, e.g. a `BIND_ADDRESS` that is not `host:port`.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
