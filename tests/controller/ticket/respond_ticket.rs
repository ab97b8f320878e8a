use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use rentdesk::{
    model::ticket::{RespondTicketDto, TicketDto, TicketStatus},
    server::controller::ticket::respond_ticket,
};

use super::*;

fn reply(message: &str, status: Option<&str>) -> RespondTicketDto {
    RespondTicketDto {
        response: message.to_string(),
        status: status.map(str::to_string),
        admin_name: Some("Dana".to_string()),
    }
}

/// Expect one appended response and the requested status
#[tokio::test]
async fn appends_response_and_moves_status() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let seeded = seed_ticket(&state, "testuser1", "Login Problem").await;

    let result = respond_ticket(
        State(state),
        Path(seeded.id.clone()),
        Json(reply("Please reset your password", Some("in_progress"))),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let ticket: TicketDto = json_body(resp).await;
    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.responses.len(), 1);
    assert_eq!(ticket.responses[0].message, "Please reset your password");
    assert_eq!(ticket.responses[0].author, "Dana");
    assert!(ticket.updated_at >= seeded.updated_at);

    Ok(())
}

/// Expect 400 and an untouched ticket for a blank message
#[tokio::test]
async fn rejects_blank_message() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let seeded = seed_ticket(&state, "testuser1", "Login Problem").await;

    let result = respond_ticket(
        State(state.clone()),
        Path(seeded.id.clone()),
        Json(reply("  ", Some("closed"))),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    let ticket = TicketService::new(state.tickets.as_ref(), &state.db)
        .get_ticket(&seeded.id)
        .await
        .unwrap();
    assert_eq!(ticket, seeded);

    Ok(())
}

/// Expect 404 when responding to a ticket that does not exist
#[tokio::test]
async fn not_found_for_unknown_ticket() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result = respond_ticket(
        State(state),
        Path(ObjectId::new().to_hex()),
        Json(reply("Hello", None)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
