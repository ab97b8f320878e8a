use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Lifecycle state of a support ticket.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Stored representation, also used in query strings and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }

    /// Bootstrap badge classes for this status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Open => "bg-success",
            Self::InProgress => "bg-warning text-dark",
            Self::Closed => "bg-secondary",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Urgency of a support ticket, `Medium` unless the requester picks otherwise.
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Ordered most to least urgent, matching the filter drop-down.
    pub const ALL: [TicketPriority; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Low => "bg-secondary",
            Self::Medium => "bg-info",
            Self::High => "bg-warning text-dark",
            Self::Urgent => "bg-danger",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// An admin reply attached to a ticket
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TicketResponseDto {
    pub message: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A support ticket
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TicketDto {
    /// Hex encoded document ID
    pub id: String,
    pub username: String,
    pub subject: String,
    pub description: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub responses: Vec<TicketResponseDto>,
}

impl TicketDto {
    /// Short reference shown to requesters after submission.
    pub fn short_id(&self) -> &str {
        let start = self.id.len().saturating_sub(8);
        self.id.get(start..).unwrap_or(&self.id)
    }
}

/// Ticket counts across the whole collection, regardless of any listing filter
#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicketStatsDto {
    pub total: u64,
    pub open: u64,
    pub in_progress: u64,
    pub closed: u64,
    pub urgent: u64,
    pub high: u64,
}

/// Filtered ticket listing
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct TicketListDto {
    pub tickets: Vec<TicketDto>,
    pub stats: TicketStatsDto,
    /// Distinct requester names, sorted
    pub usernames: Vec<String>,
}

/// Raw listing filter parameters as they arrive in the query string
///
/// Blank values mean "no filter".
#[derive(Serialize, Deserialize, IntoParams, Clone, Debug, Default, PartialEq)]
#[into_params(parameter_in = Query)]
pub struct TicketFilterParams {
    /// Exact status match (`open`, `in_progress`, `closed`)
    pub status: Option<String>,
    /// Exact priority match (`low`, `medium`, `high`, `urgent`)
    pub priority: Option<String>,
    /// Case-insensitive username substring
    pub user: Option<String>,
}

/// `?id=` query parameter of the ticket detail and respond pages
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TicketIdParams {
    #[serde(default)]
    pub id: String,
}

/// Ticket submission
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct CreateTicketDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `medium` when omitted or blank
    #[serde(default)]
    pub priority: Option<String>,
}

/// Admin reply submission
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default, PartialEq)]
pub struct RespondTicketDto {
    #[serde(default)]
    pub response: String,
    /// New status, unchanged when omitted or blank
    #[serde(default)]
    pub status: Option<String>,
    /// Author name, `Admin` when omitted or blank
    #[serde(default)]
    pub admin_name: Option<String>,
}
