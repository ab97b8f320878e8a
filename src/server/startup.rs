use std::sync::Arc;

use bson::doc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, data::ticket::MongoTicketStore, error::Error};

/// Connect to the relational database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Connect to MongoDB and verify the server answers before serving tickets from it
pub async fn connect_to_ticket_store(config: &Config) -> Result<Arc<MongoTicketStore>, Error> {
    use mongodb::Client;

    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let database = client.database(&config.mongodb_database);

    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(
        database = %config.mongodb_database,
        "Connected to MongoDB ticket store"
    );

    Ok(Arc::new(MongoTicketStore::new(&database)))
}
