use bson::oid::ObjectId;
use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::ticket::{
        CreateTicketDto, RespondTicketDto, TicketDto, TicketListDto, TicketPriority,
        TicketStatsDto, TicketStatus,
    },
    server::{
        data::ticket::TicketStore,
        error::{ticket::TicketError, Error},
        model::ticket::{
            TicketDocument, TicketFilter, TicketResponseDocument, RECENT_TICKET_LIMIT,
            TICKET_LIST_LIMIT,
        },
        service::directory::DirectoryService,
    },
};

/// Author recorded on responses submitted without a name.
pub static DEFAULT_ADMIN_NAME: &str = "Admin";

/// Service for the support ticket lifecycle.
///
/// Tickets are created by requesters and afterwards only change through admin responses,
/// which append to `responses` and may move the status. Nothing is ever deleted.
pub struct TicketService<'a> {
    tickets: &'a dyn TicketStore,
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    /// Creates a new instance of [`TicketService`]
    ///
    /// # Arguments
    /// - `tickets` - Ticket document store
    /// - `db` - Relational connection used to check requester names
    pub fn new(tickets: &'a dyn TicketStore, db: &'a DatabaseConnection) -> Self {
        Self { tickets, db }
    }

    /// Validates and stores a new ticket.
    ///
    /// All fields are trimmed. Blank fields are rejected before any store is queried, then the
    /// requester must match a customer or employee by full name.
    ///
    /// # Returns
    /// - `Ok(TicketDto)` - Stored ticket, status open and without responses
    /// - `Err(TicketError::MissingFields)` - Username, subject or description blank
    /// - `Err(TicketError::InvalidPriority)` - Priority outside low/medium/high/urgent
    /// - `Err(TicketError::UnknownUser)` - Nobody of that name in the directory
    /// - `Err(Error::DbErr | Error::MongoError)` - Lookup or insert failed
    pub async fn create_ticket(&self, ticket: CreateTicketDto) -> Result<TicketDto, Error> {
        let username = ticket.username.trim();
        let subject = ticket.subject.trim();
        let description = ticket.description.trim();

        if username.is_empty() || subject.is_empty() || description.is_empty() {
            return Err(TicketError::MissingFields.into());
        }

        let priority = match ticket.priority.as_deref().map(str::trim) {
            None | Some("") => TicketPriority::default(),
            Some(value) => value
                .parse::<TicketPriority>()
                .map_err(TicketError::InvalidPriority)?,
        };

        let directory_service = DirectoryService::new(self.db);
        if !directory_service.user_exists(username).await? {
            return Err(TicketError::UnknownUser(username.to_string()).into());
        }

        let document = TicketDocument::new(
            username.to_string(),
            subject.to_string(),
            description.to_string(),
            priority,
            Utc::now(),
        );
        let ticket = TicketDto::from(self.tickets.insert(document).await?);

        tracing::info!(
            ticket_id = %ticket.id,
            username = %ticket.username,
            priority = %ticket.priority,
            "Created support ticket"
        );

        Ok(ticket)
    }

    /// Tickets matching `filter`, newest first, capped at [`TICKET_LIST_LIMIT`]
    pub async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<TicketDto>, Error> {
        let tickets = self.tickets.find(filter, TICKET_LIST_LIMIT).await?;

        Ok(tickets.into_iter().map(TicketDto::from).collect())
    }

    /// The [`RECENT_TICKET_LIMIT`] most recently created tickets
    pub async fn get_recent_tickets(&self) -> Result<Vec<TicketDto>, Error> {
        let tickets = self
            .tickets
            .find(&TicketFilter::default(), RECENT_TICKET_LIMIT)
            .await?;

        Ok(tickets.into_iter().map(TicketDto::from).collect())
    }

    /// Counts over every ticket, independent of any listing filter
    pub async fn get_stats(&self) -> Result<TicketStatsDto, Error> {
        let all = TicketFilter::default();
        let open_filter = TicketFilter::with_status(TicketStatus::Open);
        let in_progress_filter = TicketFilter::with_status(TicketStatus::InProgress);
        let closed_filter = TicketFilter::with_status(TicketStatus::Closed);
        let urgent_filter = TicketFilter::with_priority(TicketPriority::Urgent);
        let high_filter = TicketFilter::with_priority(TicketPriority::High);
        let (total, open, in_progress, closed, urgent, high) = futures::try_join!(
            self.tickets.count(&all),
            self.tickets.count(&open_filter),
            self.tickets.count(&in_progress_filter),
            self.tickets.count(&closed_filter),
            self.tickets.count(&urgent_filter),
            self.tickets.count(&high_filter),
        )?;

        Ok(TicketStatsDto {
            total,
            open,
            in_progress,
            closed,
            urgent,
            high,
        })
    }

    pub async fn get_usernames(&self) -> Result<Vec<String>, Error> {
        self.tickets.usernames().await
    }

    /// Filtered listing together with the unfiltered stats and the requester names
    ///
    /// A failed requester name lookup is logged and leaves `usernames` empty.
    pub async fn get_ticket_list(&self, filter: &TicketFilter) -> Result<TicketListDto, Error> {
        let (tickets, stats) =
            futures::try_join!(self.list_tickets(filter), self.get_stats())?;

        let usernames = match self.get_usernames().await {
            Ok(usernames) => usernames,
            Err(err) => {
                tracing::warn!("Failed to load ticket usernames: {}", err);
                Vec::new()
            }
        };

        Ok(TicketListDto {
            tickets,
            stats,
            usernames,
        })
    }

    /// Loads a ticket by its hex encoded ID
    ///
    /// # Returns
    /// - `Ok(TicketDto)` - Ticket found
    /// - `Err(TicketError::MissingId)` - Blank ID
    /// - `Err(TicketError::InvalidId | TicketError::NotFound)` - Malformed or unknown ID
    pub async fn get_ticket(&self, id: &str) -> Result<TicketDto, Error> {
        let object_id = parse_ticket_id(id)?;

        let ticket = self.find_document(object_id).await?;

        Ok(TicketDto::from(ticket))
    }

    /// Appends an admin response and optionally changes the status.
    ///
    /// The response and the new status are written in a single update, `updated_at` never
    /// moves backwards. A blank message is rejected without touching the store.
    ///
    /// # Returns
    /// - `Ok(TicketDto)` - Reloaded ticket including the new response
    /// - `Err(TicketError::EmptyResponse)` - Blank message
    /// - `Err(TicketError::InvalidStatus)` - Status outside open/in_progress/closed
    /// - `Err(TicketError::MissingId | InvalidId | NotFound)` - Ticket cannot be found
    /// - `Err(TicketError::NotUpdated)` - Ticket vanished between read and update
    pub async fn respond(&self, id: &str, response: RespondTicketDto) -> Result<TicketDto, Error> {
        let object_id = parse_ticket_id(id)?;

        let message = response.response.trim();
        if message.is_empty() {
            return Err(TicketError::EmptyResponse.into());
        }

        let status = match response.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(
                value
                    .parse::<TicketStatus>()
                    .map_err(TicketError::InvalidStatus)?,
            ),
        };

        let author = response
            .admin_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ADMIN_NAME);

        let ticket = self.find_document(object_id).await?;
        let status = status.unwrap_or(ticket.status);
        let updated_at = Utc::now().max(ticket.updated_at);

        let entry = TicketResponseDocument {
            message: message.to_string(),
            author: author.to_string(),
            created_at: updated_at,
        };

        if !self
            .tickets
            .append_response(object_id, entry, status, updated_at)
            .await?
        {
            return Err(TicketError::NotUpdated(id.to_string()).into());
        }

        tracing::info!(
            ticket_id = %object_id,
            status = %status,
            author = %author,
            "Added response to support ticket"
        );

        let ticket = self.find_document(object_id).await?;

        Ok(TicketDto::from(ticket))
    }

    async fn find_document(&self, id: ObjectId) -> Result<TicketDocument, Error> {
        self.tickets
            .find_by_id(id)
            .await?
            .ok_or_else(|| TicketError::NotFound(id.to_hex()).into())
    }
}

fn parse_ticket_id(id: &str) -> Result<ObjectId, TicketError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(TicketError::MissingId);
    }

    ObjectId::parse_str(id).map_err(|_| TicketError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests;
