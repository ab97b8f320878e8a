use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rentdesk::{
    model::ticket::{RespondTicketDto, TicketFilterParams, TicketListDto, TicketStatus},
    server::{controller::ticket::list_tickets, service::ticket::TicketService},
};

use super::*;

/// Expect an empty listing with zero statistics for an empty store
#[tokio::test]
async fn empty_store_lists_nothing() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let result = list_tickets(State(state), Query(TicketFilterParams::default())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let list: TicketListDto = json_body(resp).await;
    assert!(list.tickets.is_empty());
    assert_eq!(list.stats.total, 0);
    assert!(list.usernames.is_empty());

    Ok(())
}

/// Expect the status filter to narrow the tickets but not the statistics
#[tokio::test]
async fn status_filter_keeps_unfiltered_stats() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let closed = seed_ticket(&state, "testuser1", "Closed issue").await;
    seed_ticket(&state, "Mark Hill", "Open issue").await;
    TicketService::new(state.tickets.as_ref(), &state.db)
        .respond(
            &closed.id,
            RespondTicketDto {
                response: "Resolved".to_string(),
                status: Some("closed".to_string()),
                admin_name: None,
            },
        )
        .await
        .unwrap();

    let params = TicketFilterParams {
        status: Some("closed".to_string()),
        priority: Some(String::new()),
        user: None,
    };
    let result = list_tickets(State(state), Query(params)).await;

    let list: TicketListDto = json_body(result.into_response()).await;
    assert_eq!(list.tickets.len(), 1);
    assert_eq!(list.tickets[0].status, TicketStatus::Closed);
    assert_eq!(list.stats.total, 2);
    assert_eq!(list.stats.open, 1);
    assert_eq!(list.stats.closed, 1);
    assert_eq!(list.usernames, vec!["Mark Hill", "testuser1"]);

    Ok(())
}

/// Expect the user filter to match username substrings case-insensitively
#[tokio::test]
async fn user_filter_matches_substring() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    seed_ticket(&state, "testuser1", "First").await;
    seed_ticket(&state, "Mark Hill", "Second").await;

    let params = TicketFilterParams {
        user: Some("TEST".to_string()),
        ..Default::default()
    };
    let result = list_tickets(State(state), Query(params)).await;

    let list: TicketListDto = json_body(result.into_response()).await;
    assert_eq!(list.tickets.len(), 1);
    assert_eq!(list.tickets[0].username, "testuser1");

    Ok(())
}
