//! Persisted shape of support tickets in the `tickets` collection.

use bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ticket::{
    TicketDto, TicketFilterParams, TicketPriority, TicketResponseDto, TicketStatus,
};

/// Maximum number of tickets returned by a single listing.
pub const TICKET_LIST_LIMIT: i64 = 100;

/// Number of tickets shown on the admin dashboard.
pub const RECENT_TICKET_LIMIT: i64 = 5;

/// A ticket as stored in MongoDB.
///
/// Older dashboards read the body from a `message` field while tickets have always been
/// written with `description`. Only `description` is read here; documents lacking it
/// load with an empty body.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TicketDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub responses: Vec<TicketResponseDocument>,
}

impl TicketDocument {
    /// A freshly submitted ticket: open, without responses, created and updated at `now`.
    pub fn new(
        username: String,
        subject: String,
        description: String,
        priority: TicketPriority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            username,
            subject,
            description,
            priority,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            responses: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TicketResponseDocument {
    pub message: String,
    pub author: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<TicketResponseDocument> for TicketResponseDto {
    fn from(response: TicketResponseDocument) -> Self {
        Self {
            message: response.message,
            author: response.author,
            created_at: response.created_at,
        }
    }
}

impl From<TicketDocument> for TicketDto {
    fn from(ticket: TicketDocument) -> Self {
        Self {
            id: ticket.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: ticket.username,
            subject: ticket.subject,
            description: ticket.description,
            priority: ticket.priority,
            status: ticket.status,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            responses: ticket.responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ticket listing criteria, every unset field matches all tickets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    /// Case-insensitive substring of the requester name, matched literally
    pub username_contains: Option<String>,
}

impl TicketFilter {
    /// Builds a filter from query parameters.
    ///
    /// Blank values and values outside the enumerations leave that criterion unset.
    pub fn from_params(params: &TicketFilterParams) -> Self {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }

        Self {
            status: present(&params.status).and_then(|v| v.parse().ok()),
            priority: present(&params.priority).and_then(|v| v.parse().ok()),
            username_contains: present(&params.user).map(str::to_string),
        }
    }

    pub fn with_status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_priority(priority: TicketPriority) -> Self {
        Self {
            priority: Some(priority),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.username_contains.is_none()
    }

    /// Evaluates the filter against a ticket held in memory.
    pub fn matches(&self, ticket: &TicketDocument) -> bool {
        if self.status.is_some_and(|status| status != ticket.status) {
            return false;
        }

        if self.priority.is_some_and(|priority| priority != ticket.priority) {
            return false;
        }

        match &self.username_contains {
            Some(needle) => ticket
                .username
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    /// Translates the filter into a MongoDB query document.
    pub fn to_document(&self) -> Document {
        let mut query = doc! {};

        if let Some(status) = self.status {
            query.insert("status", status.as_str());
        }

        if let Some(priority) = self.priority {
            query.insert("priority", priority.as_str());
        }

        if let Some(needle) = &self.username_contains {
            query.insert(
                "username",
                doc! { "$regex": regex::escape(needle), "$options": "i" },
            );
        }

        query
    }
}
