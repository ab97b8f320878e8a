//! Tests for the rendered HTML pages, driven through the router.

mod admin;
mod home;
mod procedure;
mod ticket;
mod trigger;

use axum::http::StatusCode;
use rentdesk::{
    model::ticket::{CreateTicketDto, RespondTicketDto, TicketDto},
    server::{model::app::AppState, service::ticket::TicketService},
};

use super::*;
use crate::util::{get_page, post_form, ticket_count};

async fn seed_ticket(state: &AppState, username: &str, subject: &str) -> TicketDto {
    TicketService::new(state.tickets.as_ref(), &state.db)
        .create_ticket(CreateTicketDto {
            username: username.to_string(),
            subject: subject.to_string(),
            description: "Details of the problem".to_string(),
            priority: None,
        })
        .await
        .unwrap()
}

async fn close_ticket(state: &AppState, id: &str) {
    TicketService::new(state.tickets.as_ref(), &state.db)
        .respond(
            id,
            RespondTicketDto {
                response: "Resolved".to_string(),
                status: Some("closed".to_string()),
                admin_name: None,
            },
        )
        .await
        .unwrap();
}
