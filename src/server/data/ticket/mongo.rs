use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::{
    model::ticket::TicketStatus,
    server::{
        data::ticket::TicketStore,
        error::Error,
        model::ticket::{TicketDocument, TicketFilter, TicketResponseDocument},
    },
};

pub static TICKET_COLLECTION: &str = "tickets";

pub struct MongoTicketStore {
    collection: Collection<TicketDocument>,
}

impl MongoTicketStore {
    /// Creates a new instance of [`MongoTicketStore`] over the `tickets` collection of `db`
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(TICKET_COLLECTION),
        }
    }
}

#[async_trait]
impl TicketStore for MongoTicketStore {
    async fn insert(&self, mut ticket: TicketDocument) -> Result<TicketDocument, Error> {
        let result = self.collection.insert_one(&ticket).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            Error::InternalError(format!(
                "Ticket insert returned a non ObjectId key: {}",
                result.inserted_id
            ))
        })?;
        ticket.id = Some(id);

        Ok(ticket)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<TicketDocument>, Error> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find(
        &self,
        filter: &TicketFilter,
        limit: i64,
    ) -> Result<Vec<TicketDocument>, Error> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &TicketFilter) -> Result<u64, Error> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn append_response(
        &self,
        id: ObjectId,
        response: TicketResponseDocument,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, Error> {
        let update = doc! {
            "$push": {
                "responses": {
                    "message": response.message,
                    "author": response.author,
                    "created_at": bson::DateTime::from_chrono(response.created_at),
                }
            },
            "$set": {
                "status": status.as_str(),
                "updated_at": bson::DateTime::from_chrono(updated_at),
            },
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn usernames(&self) -> Result<Vec<String>, Error> {
        let values = self.collection.distinct("username", doc! {}).await?;

        let mut usernames: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(name) if !name.is_empty() => Some(name),
                _ => None,
            })
            .collect();
        usernames.sort();

        Ok(usernames)
    }
}
