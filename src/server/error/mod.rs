//! Error types for the rentdesk server.
//!
//! Domain errors (`TicketError`, `RentalError`) carry the messages shown to users and map
//! to 4xx responses. Store and I/O failures are wrapped as they are and rendered as a
//! generic 500 by [`InternalServerError`], which logs the underlying cause.

pub mod config;
pub mod rental;
pub mod ticket;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, rental::RentalError, ticket::TicketError},
};

/// Main error type for the rentdesk server.
///
/// Aggregates the domain errors and the driver errors of both stores into one type. `#[from]`
/// lets repositories, services and handlers convert with `?`, and the `IntoResponse`
/// implementation maps each variant to the JSON API's status codes. Page handlers do not
/// respond with it directly; they turn its `Display` text into a banner.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Ticket errors (blank fields, unknown requester, priority or status, missing ticket)
/// - Rental errors (reservation, report and trigger page input, missing employee)
/// - External library errors (sea-orm, MongoDB driver, socket I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Ticket input rejected or ticket missing.
    #[error(transparent)]
    TicketError(#[from] TicketError),
    /// Reservation, report or trigger page input rejected.
    #[error(transparent)]
    RentalError(#[from] RentalError),
    /// Internal error indicating a bug in rentdesk's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Relational database error (query failures, connection issues, trigger rejections).
    #[error("Database error: {0}")]
    DbErr(#[from] sea_orm::DbErr),
    /// Document store error.
    #[error("MongoDB error: {0}")]
    MongoError(#[from] mongodb::error::Error),
    /// Socket bind or serve failure.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    /// Converts the error into an HTTP response.
    ///
    /// Domain errors delegate to their own `IntoResponse`, everything else is logged and
    /// hidden behind [`InternalServerError`].
    ///
    /// # Returns
    /// - `400 Bad Request` - Validation failures from `TicketError` or `RentalError`
    /// - `404 Not Found` - Unknown or malformed ticket ID, unknown employee
    /// - `500 Internal Server Error` - Configuration, database, document store and I/O errors,
    ///   with a generic `ErrorDto` body
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::TicketError(err) => err.into_response(),
            Self::RentalError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full message is logged, the client only receives "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
