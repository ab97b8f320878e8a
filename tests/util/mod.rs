//! Test utilities for building AppState and driving the router without a live server.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use rentdesk::{
    model::ticket::TicketStatus,
    server::{
        data::ticket::{MemoryTicketStore, TicketStore},
        error::Error,
        model::{
            app::AppState,
            ticket::{TicketDocument, TicketFilter, TicketResponseDocument},
        },
        router,
    },
};
use rentdesk_test_utils::TestContext;
use tower::ServiceExt;

/// Extension trait for TestContext to create AppState backed by an in-memory ticket store
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    fn into_app_state_with(&self, tickets: Arc<dyn TicketStore>) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with(Arc::new(MemoryTicketStore::new()))
    }

    fn into_app_state_with(&self, tickets: Arc<dyn TicketStore>) -> AppState {
        AppState {
            db: self.db.clone(),
            tickets,
        }
    }
}

/// In-memory ticket store whose distinct username lookup always fails
#[derive(Default)]
pub struct UsernamesUnavailable(MemoryTicketStore);

#[async_trait]
impl TicketStore for UsernamesUnavailable {
    async fn insert(&self, ticket: TicketDocument) -> Result<TicketDocument, Error> {
        self.0.insert(ticket).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TicketDocument>, Error> {
        self.0.find_by_id(id).await
    }

    async fn find(&self, filter: &TicketFilter, limit: i64) -> Result<Vec<TicketDocument>, Error> {
        self.0.find(filter, limit).await
    }

    async fn count(&self, filter: &TicketFilter) -> Result<u64, Error> {
        self.0.count(filter).await
    }

    async fn append_response(
        &self,
        id: ObjectId,
        response: TicketResponseDocument,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, Error> {
        self.0.append_response(id, response, status, updated_at).await
    }

    async fn usernames(&self) -> Result<Vec<String>, Error> {
        Err(Error::InternalError("distinct username lookup failed".to_string()))
    }
}

/// Sends a request through the full router.
pub async fn send(state: &AppState, request: Request<Body>) -> Response {
    router::routes()
        .with_state(state.clone())
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `GET`s a page and returns its status and HTML.
pub async fn get_page(state: &AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = send(state, request).await;
    let status = response.status();

    (status, body_text(response).await)
}

/// `POST`s an urlencoded form and returns the status and HTML of the re-rendered page.
pub async fn post_form(state: &AppState, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();

    let response = send(state, request).await;
    let status = response.status();

    (status, body_text(response).await)
}

/// Number of tickets currently in the state's store.
pub async fn ticket_count(state: &AppState) -> u64 {
    state.tickets.count(&TicketFilter::default()).await.unwrap()
}
