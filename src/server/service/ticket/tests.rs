use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Duration, Utc};
use rentdesk_test_utils::prelude::*;

use crate::{
    model::ticket::{CreateTicketDto, RespondTicketDto, TicketPriority, TicketStatus},
    server::{
        data::ticket::{MemoryTicketStore, TicketStore},
        error::{ticket::TicketError, Error},
        model::ticket::{TicketDocument, TicketFilter, TicketResponseDocument},
        service::ticket::TicketService,
    },
};

async fn setup() -> Result<(TestContext, MemoryTicketStore), TestError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .with_customer("testuser1")
        .with_customer("Anna Berg")
        .with_employee("Mark Hill", "Support Agent", 3200.0)
        .build()
        .await?;

    Ok((test, MemoryTicketStore::new()))
}

fn create_dto(username: &str, priority: Option<&str>) -> CreateTicketDto {
    CreateTicketDto {
        username: username.to_string(),
        subject: "Login Problem".to_string(),
        description: "I cannot log in to my account".to_string(),
        priority: priority.map(str::to_string),
    }
}

fn respond_dto(message: &str, status: Option<&str>) -> RespondTicketDto {
    RespondTicketDto {
        response: message.to_string(),
        status: status.map(str::to_string),
        admin_name: None,
    }
}

fn document(username: &str, status: TicketStatus, priority: TicketPriority) -> TicketDocument {
    let mut ticket = TicketDocument::new(
        username.to_string(),
        "Subject".to_string(),
        "Body".to_string(),
        priority,
        Utc::now(),
    );
    ticket.status = status;
    ticket
}

/// Store whose distinct username lookup always fails
struct UsernamesUnavailable(MemoryTicketStore);

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

mod create_ticket {
    use super::*;

    /// Expect the submitted ticket to be open, medium and without responses, then to
    /// carry exactly one response after an admin replies
    #[tokio::test]
    async fn creates_and_answers_ticket() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket_service = TicketService::new(&store, &test.db);

        let created = ticket_service
            .create_ticket(create_dto("testuser1", Some("medium")))
            .await
            .unwrap();

        assert_eq!(created.status, TicketStatus::Open);
        assert_eq!(created.priority, TicketPriority::Medium);
        assert!(created.responses.is_empty());
        assert_eq!(created.created_at, created.updated_at);

        let answered = ticket_service
            .respond(
                &created.id,
                respond_dto("Please reset your password", Some("in_progress")),
            )
            .await
            .unwrap();

        assert_eq!(answered.status, TicketStatus::InProgress);
        assert_eq!(answered.responses.len(), 1);
        assert_eq!(answered.responses[0].message, "Please reset your password");
        assert_eq!(answered.responses[0].author, "Admin");
        assert!(answered.updated_at >= created.updated_at);

        Ok(())
    }

    /// Expect surrounding whitespace to be trimmed and blank priority to default to medium
    #[tokio::test]
    async fn trims_fields_and_defaults_priority() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket_service = TicketService::new(&store, &test.db);

        let mut dto = create_dto("  Mark Hill ", Some(" "));
        dto.subject = "  Broken printer  ".to_string();
        let created = ticket_service.create_ticket(dto).await.unwrap();

        assert_eq!(created.username, "Mark Hill");
        assert_eq!(created.subject, "Broken printer");
        assert_eq!(created.priority, TicketPriority::Medium);

        Ok(())
    }

    /// Expect MissingFields without querying any store
    ///
    /// The database has no tables, so any query would surface as a database error.
    #[tokio::test]
    async fn rejects_blank_fields_before_database() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let store = MemoryTicketStore::new();
        let ticket_service = TicketService::new(&store, &test.db);

        let mut dto = create_dto("testuser1", None);
        dto.description = "   ".to_string();
        let result = ticket_service.create_ticket(dto).await;

        assert!(matches!(
            result,
            Err(Error::TicketError(TicketError::MissingFields))
        ));
        assert_eq!(store.count(&TicketFilter::default()).await.unwrap(), 0);

        Ok(())
    }

    /// Expect UnknownUser and nothing stored for a name outside the directory
    #[tokio::test]
    async fn rejects_unknown_user() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket_service = TicketService::new(&store, &test.db);

        let result = ticket_service
            .create_ticket(create_dto("nobody", None))
            .await;

        assert!(matches!(
            result,
            Err(Error::TicketError(TicketError::UnknownUser(_)))
        ));
        assert_eq!(store.count(&TicketFilter::default()).await.unwrap(), 0);

        Ok(())
    }

    /// Expect InvalidPriority for a value outside the enumeration
    #[tokio::test]
    async fn rejects_unknown_priority() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket_service = TicketService::new(&store, &test.db);

        let result = ticket_service
            .create_ticket(create_dto("testuser1", Some("critical")))
            .await;

        assert!(matches!(
            result,
            Err(Error::TicketError(TicketError::InvalidPriority(_)))
        ));
        assert_eq!(store.count(&TicketFilter::default()).await.unwrap(), 0);

        Ok(())
    }
}

mod list_tickets {
    use super::*;

    /// Expect at most 100 tickets regardless of how many exist
    #[tokio::test]
    async fn caps_listing() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        for i in 0..120 {
            let mut ticket = document("testuser1", TicketStatus::Open, TicketPriority::Low);
            ticket.created_at = Utc::now() + Duration::seconds(i);
            store.insert(ticket).await.unwrap();
        }
        let ticket_service = TicketService::new(&store, &test.db);

        let tickets = ticket_service
            .list_tickets(&TicketFilter::default())
            .await
            .unwrap();

        assert_eq!(tickets.len(), 100);
        assert!(tickets
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));

        Ok(())
    }

    /// Expect only closed tickets for status=closed
    #[tokio::test]
    async fn filters_by_status() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        for status in [TicketStatus::Open, TicketStatus::Closed, TicketStatus::Closed] {
            store
                .insert(document("testuser1", status, TicketPriority::Medium))
                .await
                .unwrap();
        }
        let ticket_service = TicketService::new(&store, &test.db);

        let tickets = ticket_service
            .list_tickets(&TicketFilter::with_status(TicketStatus::Closed))
            .await
            .unwrap();

        assert_eq!(tickets.len(), 2);
        assert!(tickets.iter().all(|t| t.status == TicketStatus::Closed));

        Ok(())
    }

    /// Expect only usernames containing "test" in any case
    #[tokio::test]
    async fn filters_by_username_substring() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        for username in ["testuser1", "TESTER", "Anna Berg"] {
            store
                .insert(document(username, TicketStatus::Open, TicketPriority::Medium))
                .await
                .unwrap();
        }
        let ticket_service = TicketService::new(&store, &test.db);

        let filter = TicketFilter {
            username_contains: Some("test".to_string()),
            ..Default::default()
        };
        let tickets = ticket_service.list_tickets(&filter).await.unwrap();

        assert_eq!(tickets.len(), 2);
        assert!(tickets
            .iter()
            .all(|t| t.username.to_lowercase().contains("test")));

        Ok(())
    }

    /// Expect stats over all tickets while the listing is filtered
    #[tokio::test]
    async fn stats_ignore_filter() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let tickets = [
            (TicketStatus::Open, TicketPriority::Urgent),
            (TicketStatus::Open, TicketPriority::High),
            (TicketStatus::InProgress, TicketPriority::Low),
            (TicketStatus::Closed, TicketPriority::High),
        ];
        for (status, priority) in tickets {
            store
                .insert(document("testuser1", status, priority))
                .await
                .unwrap();
        }
        let ticket_service = TicketService::new(&store, &test.db);

        let list = ticket_service
            .get_ticket_list(&TicketFilter::with_status(TicketStatus::Closed))
            .await
            .unwrap();

        assert_eq!(list.tickets.len(), 1);
        assert_eq!(list.stats.total, 4);
        assert_eq!(list.stats.open, 2);
        assert_eq!(list.stats.in_progress, 1);
        assert_eq!(list.stats.closed, 1);
        assert_eq!(list.stats.urgent, 1);
        assert_eq!(list.stats.high, 2);
        assert_eq!(list.usernames, vec!["testuser1"]);

        Ok(())
    }

    /// Expect the listing and stats to survive a failed username lookup
    #[tokio::test]
    async fn keeps_listing_without_usernames() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let store = UsernamesUnavailable(store);
        store
            .insert(document("testuser1", TicketStatus::Open, TicketPriority::High))
            .await
            .unwrap();
        let ticket_service = TicketService::new(&store, &test.db);

        let list = ticket_service
            .get_ticket_list(&TicketFilter::default())
            .await
            .unwrap();

        assert_eq!(list.tickets.len(), 1);
        assert_eq!(list.stats.total, 1);
        assert_eq!(list.stats.high, 1);
        assert!(list.usernames.is_empty());

        Ok(())
    }

    /// Expect the dashboard to show the five newest tickets
    #[tokio::test]
    async fn recent_tickets_are_newest_five() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        for i in 0..7 {
            let mut ticket = document(&format!("user{}", i), TicketStatus::Open, TicketPriority::Low);
            ticket.created_at = Utc::now() + Duration::minutes(i);
            store.insert(ticket).await.unwrap();
        }
        let ticket_service = TicketService::new(&store, &test.db);

        let tickets = ticket_service.get_recent_tickets().await.unwrap();

        assert_eq!(tickets.len(), 5);
        assert_eq!(tickets[0].username, "user6");

        Ok(())
    }
}

mod get_ticket {
    use super::*;

    /// Expect MissingId, InvalidId or NotFound depending on the ID given
    #[tokio::test]
    async fn reports_missing_tickets() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket_service = TicketService::new(&store, &test.db);

        let result = ticket_service.get_ticket("").await;
        assert!(matches!(result, Err(Error::TicketError(TicketError::MissingId))));

        let result = ticket_service.get_ticket("not-an-id").await;
        assert!(matches!(result, Err(Error::TicketError(TicketError::InvalidId(_)))));

        let result = ticket_service.get_ticket(&ObjectId::new().to_hex()).await;
        assert!(matches!(result, Err(Error::TicketError(TicketError::NotFound(_)))));

        Ok(())
    }
}

mod respond {
    use super::*;

    /// Expect EmptyResponse and an untouched ticket for a blank message
    #[tokio::test]
    async fn rejects_blank_message() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket = store
            .insert(document("testuser1", TicketStatus::Open, TicketPriority::Low))
            .await
            .unwrap();
        let id = ticket.id.unwrap().to_hex();
        let ticket_service = TicketService::new(&store, &test.db);

        let result = ticket_service
            .respond(&id, respond_dto("   ", Some("closed")))
            .await;

        assert!(matches!(result, Err(Error::TicketError(TicketError::EmptyResponse))));
        let ticket = ticket_service.get_ticket(&id).await.unwrap();
        assert!(ticket.responses.is_empty());
        assert_eq!(ticket.status, TicketStatus::Open);

        Ok(())
    }

    /// Expect the status to stay unchanged and the author to be recorded
    #[tokio::test]
    async fn keeps_status_when_not_given() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket = store
            .insert(document("testuser1", TicketStatus::InProgress, TicketPriority::Low))
            .await
            .unwrap();
        let id = ticket.id.unwrap().to_hex();
        let ticket_service = TicketService::new(&store, &test.db);

        let mut dto = respond_dto("We are looking into it", None);
        dto.admin_name = Some("Support Team".to_string());
        let answered = ticket_service.respond(&id, dto).await.unwrap();

        assert_eq!(answered.status, TicketStatus::InProgress);
        assert_eq!(answered.responses[0].author, "Support Team");

        Ok(())
    }

    /// Expect updated_at to never move backwards
    #[tokio::test]
    async fn never_moves_updated_at_backwards() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let mut ticket = document("testuser1", TicketStatus::Open, TicketPriority::Low);
        let future = Utc::now() + Duration::hours(1);
        ticket.updated_at = future;
        let ticket = store.insert(ticket).await.unwrap();
        let id = ticket.id.unwrap().to_hex();
        let ticket_service = TicketService::new(&store, &test.db);

        let answered = ticket_service
            .respond(&id, respond_dto("Closing this", Some("closed")))
            .await
            .unwrap();

        assert_eq!(answered.updated_at, future);
        assert_eq!(answered.status, TicketStatus::Closed);

        Ok(())
    }

    /// Expect NotFound for a well formed but unknown ID
    #[tokio::test]
    async fn fails_for_unknown_ticket() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket_service = TicketService::new(&store, &test.db);

        let result = ticket_service
            .respond(&ObjectId::new().to_hex(), respond_dto("Hello", None))
            .await;

        assert!(matches!(result, Err(Error::TicketError(TicketError::NotFound(_)))));

        Ok(())
    }

    /// Expect InvalidStatus for a status outside the enumeration
    #[tokio::test]
    async fn rejects_unknown_status() -> Result<(), TestError> {
        let (test, store) = setup().await?;
        let ticket = store
            .insert(document("testuser1", TicketStatus::Open, TicketPriority::Low))
            .await
            .unwrap();
        let ticket_service = TicketService::new(&store, &test.db);

        let result = ticket_service
            .respond(&ticket.id.unwrap().to_hex(), respond_dto("Hi", Some("pending")))
            .await;

        assert!(matches!(result, Err(Error::TicketError(TicketError::InvalidStatus(_)))));

        Ok(())
    }
}
