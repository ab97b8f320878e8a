//! Ticket document store.
//!
//! Services talk to the `tickets` collection through the [`TicketStore`] trait so that the
//! MongoDB driver can be swapped for the in-memory store in tests and local demos.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::{
    model::ticket::TicketStatus,
    server::{
        error::Error,
        model::ticket::{TicketDocument, TicketFilter, TicketResponseDocument},
    },
};

pub use memory::MemoryTicketStore;
pub use mongo::MongoTicketStore;

#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Stores a new ticket and returns it with its generated ID.
    async fn insert(&self, ticket: TicketDocument) -> Result<TicketDocument, Error>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TicketDocument>, Error>;

    /// Tickets matching `filter`, newest `created_at` first, at most `limit` of them.
    async fn find(&self, filter: &TicketFilter, limit: i64)
        -> Result<Vec<TicketDocument>, Error>;

    async fn count(&self, filter: &TicketFilter) -> Result<u64, Error>;

    /// Appends a response and sets status and `updated_at` in one update.
    ///
    /// Returns `false` when no ticket has the given ID.
    async fn append_response(
        &self,
        id: ObjectId,
        response: TicketResponseDocument,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, Error>;

    /// Distinct non-empty requester names, sorted.
    async fn usernames(&self) -> Result<Vec<String>, Error>;
}
