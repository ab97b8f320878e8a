use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Form,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::FlashDto,
        rental::RequesterDto,
        ticket::{CreateTicketDto, RespondTicketDto, TicketDto, TicketIdParams},
    },
    server::{
        controller::page::{recover, report},
        model::app::AppState,
        service::{directory::DirectoryService, ticket::TicketService},
    },
    view::{
        pages::{
            admin::{TicketRespondPage, TicketRespondProps, TicketViewPage, TicketViewProps},
            user::{TicketCreatePage, TicketCreateProps},
        },
        render_page,
    },
};

async fn ticket_create_view(
    state: &AppState,
    mut flash: FlashDto,
    form: CreateTicketDto,
) -> Html<String> {
    let directory_service = DirectoryService::new(&state.db);

    let users = recover("Failed to load users", directory_service.get_users().await, &mut flash);

    render_page(TicketCreatePage, TicketCreateProps { flash, users, form })
}

/// Render the ticket creation form
pub async fn ticket_create_page(State(state): State<AppState>) -> impl IntoResponse {
    ticket_create_view(&state, FlashDto::default(), CreateTicketDto::default()).await
}

/// Create a ticket from the submitted form
///
/// Rejected submissions keep the entered values in the form.
pub async fn submit_ticket(
    State(state): State<AppState>,
    Form(form): Form<CreateTicketDto>,
) -> impl IntoResponse {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    match ticket_service.create_ticket(form.clone()).await {
        Ok(ticket) => {
            let flash = FlashDto::success(format!(
                "Ticket created successfully! Ticket ID: {}",
                ticket.short_id()
            ));

            ticket_create_view(&state, flash, CreateTicketDto::default()).await
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to create ticket", err, &mut flash);

            ticket_create_view(&state, flash, form).await
        }
    }
}

/// Loads a ticket for the detail pages together with its requester.
///
/// Requester lookup failures only hide the requester card.
async fn load_ticket(
    state: &AppState,
    id: &str,
    flash: &mut FlashDto,
) -> (Option<TicketDto>, Option<RequesterDto>) {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    let ticket = match ticket_service.get_ticket(id).await {
        Ok(ticket) => ticket,
        Err(err) => {
            report("Failed to load ticket", err, flash);
            return (None, None);
        }
    };

    let directory_service = DirectoryService::new(&state.db);
    let requester = match directory_service.find_requester(&ticket.username).await {
        Ok(requester) => requester,
        Err(err) => {
            tracing::warn!(
                "Failed to look up requester {:?} of ticket {}: {}",
                ticket.username,
                ticket.id,
                err
            );
            None
        }
    };

    (Some(ticket), requester)
}

/// Render a ticket with its responses and requester information
pub async fn ticket_view_page(
    State(state): State<AppState>,
    Query(params): Query<TicketIdParams>,
) -> impl IntoResponse {
    let mut flash = FlashDto::default();

    let (ticket, requester) = load_ticket(&state, &params.id, &mut flash).await;

    render_page(
        TicketViewPage,
        TicketViewProps {
            flash,
            ticket,
            requester,
        },
    )
}

/// Render the response form of a ticket
pub async fn ticket_respond_page(
    State(state): State<AppState>,
    Query(params): Query<TicketIdParams>,
) -> impl IntoResponse {
    let mut flash = FlashDto::default();

    let (ticket, requester) = load_ticket(&state, &params.id, &mut flash).await;

    render_page(
        TicketRespondPage,
        TicketRespondProps {
            flash,
            ticket,
            requester,
            form: RespondTicketDto::default(),
        },
    )
}

/// Append the submitted response and redisplay the reloaded ticket
pub async fn submit_response(
    State(state): State<AppState>,
    Query(params): Query<TicketIdParams>,
    Form(form): Form<RespondTicketDto>,
) -> impl IntoResponse {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);

    let (mut flash, form) = match ticket_service.respond(&params.id, form.clone()).await {
        Ok(_) => {
            let form = RespondTicketDto {
                admin_name: form.admin_name,
                ..Default::default()
            };

            (
                FlashDto::success("Response added successfully and ticket status updated."),
                form,
            )
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to add ticket response", err, &mut flash);

            (flash, form)
        }
    };

    let (ticket, requester) = load_ticket(&state, &params.id, &mut flash).await;

    render_page(
        TicketRespondPage,
        TicketRespondProps {
            flash,
            ticket,
            requester,
            form,
        },
    )
}
