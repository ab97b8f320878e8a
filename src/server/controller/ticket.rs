use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{CreateTicketDto, RespondTicketDto, TicketDto, TicketFilterParams, TicketListDto},
    },
    server::{
        error::Error,
        model::{app::AppState, ticket::TicketFilter},
        service::ticket::TicketService,
    },
};

pub static TICKET_TAG: &str = "ticket";

/// List tickets matching the optional filters, newest first
///
/// Statistics are computed over all tickets regardless of the filters.
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = TICKET_TAG,
    params(TicketFilterParams),
    responses(
        (status = 200, description = "Success when listing tickets", body = TicketListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    Query(params): Query<TicketFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    let filter = TicketFilter::from_params(&params);
    let list = ticket_service.get_ticket_list(&filter).await?;

    Ok((StatusCode::OK, Json(list)))
}

/// Get a single ticket with its responses
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = String, Path, description = "Ticket ObjectId in hex")),
    responses(
        (status = 200, description = "Success when retrieving the ticket", body = TicketDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    let ticket = ticket_service.get_ticket(&id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Create a ticket for an existing customer or employee
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketDto),
        (status = 400, description = "Missing fields, unknown priority or unknown user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    let ticket = ticket_service.create_ticket(payload).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Append an admin response and optionally move the ticket to another status
#[utoipa::path(
    post,
    path = "/api/tickets/{id}/responses",
    tag = TICKET_TAG,
    params(("id" = String, Path, description = "Ticket ObjectId in hex")),
    request_body = RespondTicketDto,
    responses(
        (status = 200, description = "Response added, returns the updated ticket", body = TicketDto),
        (status = 400, description = "Empty message or unknown status", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RespondTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    let ticket = ticket_service.respond(&id, payload).await?;

    Ok((StatusCode::OK, Json(ticket)))
}
