use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Rejections of ticket operations.
///
/// The display strings double as the banners shown on the ticket pages.
#[derive(Error, Debug, PartialEq)]
pub enum TicketError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Unknown priority: {0:?}")]
    InvalidPriority(String),
    #[error("Unknown status: {0:?}")]
    InvalidStatus(String),
    #[error("No customer or employee is named {0:?}.")]
    UnknownUser(String),
    #[error("Please enter a response message.")]
    EmptyResponse,
    #[error("Ticket ID not specified.")]
    MissingId,
    #[error("Ticket not found.")]
    InvalidId(String),
    #[error("Ticket not found.")]
    NotFound(String),
    #[error("Response could not be added.")]
    NotUpdated(String),
}

impl TicketError {
    /// Whether the error means the ticket does not exist, as opposed to a rejected input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidId(_) | Self::NotFound(_))
    }
}

impl IntoResponse for TicketError {
    fn into_response(self) -> Response {
        match self {
            Self::NotUpdated(ref id) => {
                let message = format!("Ticket {} matched no document on update", id);

                InternalServerError(message).into_response()
            }
            err if err.is_not_found() => {
                tracing::debug!("{:?}", err);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("{}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
