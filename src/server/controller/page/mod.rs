//! Handlers for the server-rendered HTML pages.
//!
//! Page handlers never fail a request. Every failed service call is logged and turned into
//! the page's error banner while the affected section renders with empty data.

pub mod admin;
pub mod home;
pub mod procedure;
pub mod ticket;
pub mod trigger;

use dioxus_logger::tracing;

use crate::{model::api::FlashDto, server::error::Error};

/// Logs a failed page operation and shows it as the error banner.
pub fn report(context: &str, err: Error, flash: &mut FlashDto) {
    match &err {
        Error::TicketError(_) | Error::RentalError(_) => {
            tracing::debug!("{}: {}", context, err)
        }
        _ => tracing::error!("{}: {}", context, err),
    }

    flash.push_error(err.to_string());
}

/// Unwraps a page query result, falling back to the default value after reporting the error.
pub fn recover<T: Default>(context: &str, result: Result<T, Error>, flash: &mut FlashDto) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            report(context, err, flash);
            T::default()
        }
    }
}
