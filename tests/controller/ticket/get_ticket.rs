use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bson::oid::ObjectId;
use rentdesk::{
    model::{api::ErrorDto, ticket::TicketDto},
    server::controller::ticket::get_ticket,
};

use super::*;

/// Expect 200 with the stored ticket
#[tokio::test]
async fn returns_stored_ticket() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let seeded = seed_ticket(&state, "testuser1", "Broken mirror").await;

    let result = get_ticket(State(state), Path(seeded.id.clone())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let ticket: TicketDto = json_body(resp).await;
    assert_eq!(ticket, seeded);

    Ok(())
}

/// Expect 404 for a well-formed ID that matches no ticket
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result = get_ticket(State(state), Path(ObjectId::new().to_hex())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Ticket not found.");

    Ok(())
}

/// Expect 404 rather than 400 for an ID that is not an ObjectId
#[tokio::test]
async fn not_found_for_malformed_id() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result = get_ticket(State(state), Path("not-an-id".to_string())).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
