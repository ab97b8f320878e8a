use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected inputs on the reservation, report and trigger pages.
#[derive(Error, Debug, PartialEq)]
pub enum RentalError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please select {0}.")]
    SelectionRequired(&'static str),
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Invalid date for {field}: {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("Employee not found.")]
    EmployeeNotFound(i32),
    #[error("Salary not changed (same value).")]
    SalaryUnchanged,
}

impl IntoResponse for RentalError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
