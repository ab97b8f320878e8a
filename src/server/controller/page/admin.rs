use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::FlashDto,
        ticket::{TicketFilterParams, TicketListDto},
    },
    server::{
        controller::page::recover,
        model::{app::AppState, ticket::TicketFilter},
        service::ticket::TicketService,
    },
    view::{
        pages::admin::{AdminDashboardPage, AdminDashboardProps, TicketListPage, TicketListProps},
        render_page,
    },
};

/// Render the admin dashboard with ticket statistics and the most recent tickets
pub async fn admin_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);
    let mut flash = FlashDto::default();

    let stats = recover(
        "Failed to count tickets",
        ticket_service.get_stats().await,
        &mut flash,
    );
    let recent = recover(
        "Failed to load recent tickets",
        ticket_service.get_recent_tickets().await,
        &mut flash,
    );

    render_page(
        AdminDashboardPage,
        AdminDashboardProps {
            flash,
            stats,
            recent,
        },
    )
}

/// Render the filtered ticket listing
pub async fn ticket_list_page(
    State(state): State<AppState>,
    Query(params): Query<TicketFilterParams>,
) -> impl IntoResponse {
    let ticket_service = TicketService::new(state.tickets.as_ref(), &state.db);
    let mut flash = FlashDto::default();

    let filter = TicketFilter::from_params(&params);
    let tickets = recover(
        "Failed to list tickets",
        ticket_service.list_tickets(&filter).await,
        &mut flash,
    );
    let stats = recover(
        "Failed to count tickets",
        ticket_service.get_stats().await,
        &mut flash,
    );
    let usernames = recover(
        "Failed to load ticket usernames",
        ticket_service.get_usernames().await,
        &mut flash,
    );
    let list = TicketListDto {
        tickets,
        stats,
        usernames,
    };

    render_page(
        TicketListPage,
        TicketListProps {
            flash,
            list,
            params,
        },
    )
}
