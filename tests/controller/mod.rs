//! Tests for HTTP controller endpoints.
//!
//! `ticket` calls the JSON API handlers directly, `page` drives the rendered pages through
//! the router and inspects the returned HTML.

mod page;
mod ticket;

use rentdesk_test_utils::prelude::*;

use crate::util::TestContextExt;

/// Creates the requester names the ticket tests submit with.
async fn ticket_test_context() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_rental_tables()
        .with_customer("testuser1")
        .with_employee("Mark Hill", "Support Agent", 3200.0)
        .build()
        .await
}
