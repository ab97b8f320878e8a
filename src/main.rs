use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;

use rentdesk::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dioxus_logger::init(Level::INFO).ok();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let tickets = startup::connect_to_ticket_store(&config).await?;

    let app = router::routes().with_state(AppState { db, tickets });

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on http://{}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
