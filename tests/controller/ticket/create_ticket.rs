use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rentdesk::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, TicketDto, TicketPriority, TicketStatus},
    },
    server::controller::ticket::create_ticket,
};

use super::*;
use crate::util::ticket_count;

fn payload(username: &str, priority: Option<&str>) -> CreateTicketDto {
    CreateTicketDto {
        username: username.to_string(),
        subject: "Login Problem".to_string(),
        description: "I cannot log in to my account".to_string(),
        priority: priority.map(str::to_string),
    }
}

/// Expect 201 with an open ticket without responses
#[tokio::test]
async fn creates_open_ticket() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result = create_ticket(State(state.clone()), Json(payload("testuser1", Some("high")))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let ticket: TicketDto = json_body(resp).await;
    assert_eq!(ticket.username, "testuser1");
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.status, TicketStatus::Open);
    assert!(ticket.responses.is_empty());
    assert_eq!(ticket_count(&state).await, 1);

    Ok(())
}

/// Expect 400 and no stored ticket when the subject is blank
#[tokio::test]
async fn rejects_blank_subject() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let mut dto = payload("testuser1", None);
    dto.subject = "   ".to_string();
    let result = create_ticket(State(state.clone()), Json(dto)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Please fill in all fields.");
    assert_eq!(ticket_count(&state).await, 0);

    Ok(())
}

/// Expect 400 for a requester that is neither customer nor employee
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result = create_ticket(State(state.clone()), Json(payload("nobody", None))).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(ticket_count(&state).await, 0);

    Ok(())
}

/// Expect 400 for a priority outside the four known values
#[tokio::test]
async fn rejects_unknown_priority() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result =
        create_ticket(State(state.clone()), Json(payload("Mark Hill", Some("critical")))).await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(ticket_count(&state).await, 0);

    Ok(())
}

/// Expect 500 when the customer table cannot be queried
#[tokio::test]
async fn fails_when_database_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let result = create_ticket(State(state.clone()), Json(payload("testuser1", None))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorDto = json_body(resp).await;
    assert_eq!(error.error, "Internal server error");

    Ok(())
}
