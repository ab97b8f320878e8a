//! Tests for the JSON ticket API handlers.

mod create_ticket;
mod get_ticket;
mod list_tickets;
mod respond_ticket;

use axum::{body::to_bytes, response::Response};
use rentdesk::{
    model::ticket::{CreateTicketDto, TicketDto},
    server::{model::app::AppState, service::ticket::TicketService},
};
use serde::de::DeserializeOwned;

use super::*;

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Stores a ticket through the service so the handler under test finds it.
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
