use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    model::ticket::TicketStatus,
    server::{
        data::ticket::TicketStore,
        error::Error,
        model::ticket::{TicketDocument, TicketFilter, TicketResponseDocument},
    },
};

/// Process-local ticket store applying the same filter and ordering rules as MongoDB.
///
/// Tickets with equal `created_at` are listed newest insert first.
#[derive(Default)]
pub struct MemoryTicketStore {
    tickets: RwLock<Vec<TicketDocument>>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn insert(&self, mut ticket: TicketDocument) -> Result<TicketDocument, Error> {
        ticket.id = Some(ObjectId::new());

        self.tickets.write().await.push(ticket.clone());

        Ok(ticket)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TicketDocument>, Error> {
        let tickets = self.tickets.read().await;

        Ok(tickets.iter().find(|t| t.id == Some(id)).cloned())
    }

    async fn find(
        &self,
        filter: &TicketFilter,
        limit: i64,
    ) -> Result<Vec<TicketDocument>, Error> {
        let tickets = self.tickets.read().await;

        let mut found: Vec<TicketDocument> = tickets
            .iter()
            .rev()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(found)
    }

    async fn count(&self, filter: &TicketFilter) -> Result<u64, Error> {
        let tickets = self.tickets.read().await;

        Ok(tickets.iter().filter(|t| filter.matches(t)).count() as u64)
    }

    async fn append_response(
        &self,
        id: ObjectId,
        response: TicketResponseDocument,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, Error> {
        let mut tickets = self.tickets.write().await;

        let Some(ticket) = tickets.iter_mut().find(|t| t.id == Some(id)) else {
            return Ok(false);
        };

        ticket.responses.push(response);
        ticket.status = status;
        ticket.updated_at = updated_at;

        Ok(true)
    }

    async fn usernames(&self) -> Result<Vec<String>, Error> {
        let tickets = self.tickets.read().await;

        let mut usernames: Vec<String> = tickets
            .iter()
            .map(|t| t.username.clone())
            .filter(|name| !name.is_empty())
            .collect();
        usernames.sort();
        usernames.dedup();

        Ok(usernames)
    }
}
