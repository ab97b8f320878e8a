use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::data::ticket::TicketStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tickets: Arc<dyn TicketStore>,
}
