use axum::{
    body::Body,
    http::{header, Request},
};

use super::*;
use crate::util::send;

/// Expect the site root to redirect to the user panel
#[tokio::test]
async fn root_redirects_to_user_panel() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = send(&state, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/user");

    Ok(())
}

/// Expect the user panel to link every demo page
#[tokio::test]
async fn user_panel_links_demo_pages() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let (status, html) = get_page(&state, "/user").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    for href in [
        "/user/tickets/create",
        "/user/procedures/create-reservation",
        "/user/procedures/branch-cars",
        "/user/procedures/car-damage-history",
        "/user/procedures/employee-performance",
        "/user/triggers/rental-period",
        "/user/triggers/damage-notification",
        "/user/triggers/salary-audit",
        "/user/triggers/insurance-check",
    ] {
        assert!(html.contains(href), "missing link to {}", href);
    }

    Ok(())
}
