use bson::oid::ObjectId;

use super::*;

/// Expect the creation form to offer customers and employees by name
#[tokio::test]
async fn create_form_lists_requesters() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let (status, html) = get_page(&state, "/user/tickets/create").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("testuser1 (Customer)"));
    assert!(html.contains("Mark Hill (Employee)"));

    Ok(())
}

/// Expect the short ticket ID in the success banner
#[tokio::test]
async fn create_shows_short_id() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let (status, html) = post_form(
        &state,
        "/user/tickets/create",
        "username=testuser1&subject=Login+Problem&description=Cannot+log+in&priority=medium",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Ticket created successfully! Ticket ID: "));
    assert_eq!(ticket_count(&state).await, 1);

    Ok(())
}

/// Expect a banner and the entered subject kept when a field is missing
#[tokio::test]
async fn create_keeps_input_on_missing_field() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    let (status, html) = post_form(
        &state,
        "/user/tickets/create",
        "username=testuser1&subject=Flat+tyre&description=&priority=",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please fill in all fields."));
    assert!(html.contains("Flat tyre"));
    assert_eq!(ticket_count(&state).await, 0);

    Ok(())
}

/// Expect the page to render with a database banner instead of failing
#[tokio::test]
async fn create_form_survives_database_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let (status, html) = get_page(&state, "/user/tickets/create").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Database error"));

    Ok(())
}

/// Expect ticket details with the matching customer
#[tokio::test]
async fn view_shows_ticket_and_requester() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let ticket = seed_ticket(&state, "testuser1", "Broken wiper").await;

    let (status, html) =
        get_page(&state, &format!("/admin/tickets/view?id={}", ticket.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Broken wiper"));
    assert!(html.contains("Customer"));
    assert!(html.contains("testuser1@example.com"));
    assert!(html.contains(&format!("/admin/tickets/respond?id={}", ticket.id)));

    Ok(())
}

/// Expect no respond action on a closed ticket
#[tokio::test]
async fn view_hides_respond_for_closed_ticket() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let ticket = seed_ticket(&state, "testuser1", "Broken wiper").await;
    close_ticket(&state, &ticket.id).await;

    let (_, html) = get_page(&state, &format!("/admin/tickets/view?id={}", ticket.id)).await;

    assert!(html.contains("Closed"));
    assert!(!html.contains("/admin/tickets/respond?id="));

    Ok(())
}

/// Expect a not found banner for unknown and malformed IDs
#[tokio::test]
async fn view_reports_missing_ticket() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();

    for id in [ObjectId::new().to_hex(), "garbage".to_string()] {
        let (status, html) = get_page(&state, &format!("/admin/tickets/view?id={}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Ticket not found."));
    }

    let (_, html) = get_page(&state, "/admin/tickets/view").await;
    assert!(html.contains("Ticket ID not specified."));

    Ok(())
}

/// Expect the response form prefilled with the default responder name
#[tokio::test]
async fn respond_form_prefills_responder() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let ticket = seed_ticket(&state, "Mark Hill", "Printer jam").await;

    let (status, html) =
        get_page(&state, &format!("/admin/tickets/respond?id={}", ticket.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Support Team"));
    assert!(html.contains("Employee"));
    assert!(html.contains("Support Agent"));

    Ok(())
}

/// Expect the response to be appended and shown after submitting
#[tokio::test]
async fn respond_appends_response() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let ticket = seed_ticket(&state, "testuser1", "Login Problem").await;

    let (status, html) = post_form(
        &state,
        &format!("/admin/tickets/respond?id={}", ticket.id),
        "admin_name=Dana&response=Please+reset+your+password&status=in_progress",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Response added successfully and ticket status updated."));
    assert!(html.contains("Please reset your password"));
    assert!(html.contains(r#"<span class="badge bg-warning text-dark">In Progress</span>"#));

    let stored = TicketService::new(state.tickets.as_ref(), &state.db)
        .get_ticket(&ticket.id)
        .await
        .unwrap();
    assert_eq!(stored.responses.len(), 1);
    assert_eq!(stored.responses[0].author, "Dana");

    Ok(())
}

/// Expect a banner and no response for a blank message
#[tokio::test]
async fn respond_rejects_blank_message() -> Result<(), TestError> {
    let test = ticket_test_context().await?;
    let state = test.into_app_state();
    let ticket = seed_ticket(&state, "testuser1", "Login Problem").await;

    let (_, html) = post_form(
        &state,
        &format!("/admin/tickets/respond?id={}", ticket.id),
        "admin_name=&response=+++&status=",
    )
    .await;

    assert!(html.contains("Please enter a response message."));

    let stored = TicketService::new(state.tickets.as_ref(), &state.db)
        .get_ticket(&ticket.id)
        .await
        .unwrap();
    assert!(stored.responses.is_empty());

    Ok(())
}
