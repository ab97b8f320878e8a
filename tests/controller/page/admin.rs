use std::sync::Arc;

use super::*;
use crate::util::UsernamesUnavailable;

/// Expect the empty state on a dashboard without tickets
#[tokio::test]
async fn dashboard_without_tickets() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let (status, html) = get_page(&state, "/admin").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Ticket Statistics"));
    assert!(html.contains("No tickets have been created yet."));

    Ok(())
}

/// Expect recent tickets and a link to the full listing
#[tokio::test]
async fn dashboard_lists_recent_tickets() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    seed_ticket(&state, "testuser1", "Dirty seats").await;

    let (_, html) = get_page(&state, "/admin").await;

    assert!(html.contains("Dirty seats"));
    assert!(html.contains("View All"));
    assert!(!html.contains("No tickets have been created yet."));

    Ok(())
}

/// Expect only closed tickets with status=closed, blank parameters ignored
#[tokio::test]
async fn listing_filters_by_status() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let closed = seed_ticket(&state, "testuser1", "Finished business").await;
    seed_ticket(&state, "Mark Hill", "Pending business").await;
    close_ticket(&state, &closed.id).await;

    let (status, html) = get_page(&state, "/admin/tickets?status=closed&priority=&user=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Finished business"));
    assert!(!html.contains("Pending business"));

    let (_, html) = get_page(&state, "/admin/tickets?status=&priority=&user=").await;
    assert!(html.contains("Finished business"));
    assert!(html.contains("Pending business"));

    Ok(())
}

/// Expect the no results message when nothing matches
#[tokio::test]
async fn listing_without_matches() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    seed_ticket(&state, "testuser1", "Anything").await;

    let (_, html) = get_page(&state, "/admin/tickets?priority=urgent").await;

    assert!(html.contains("No tickets found."));

    Ok(())
}

/// Expect tickets and stats to render when the requester names cannot be loaded
#[tokio::test]
async fn listing_survives_failed_username_lookup() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state_with(Arc::new(UsernamesUnavailable::default()));
    seed_ticket(&state, "testuser1", "Broken mirror").await;

    let (status, html) = get_page(&state, "/admin/tickets").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Broken mirror"));
    assert!(!html.contains("No tickets found."));
    assert!(html.contains("Internal error: distinct username lookup failed"));

    Ok(())
}
