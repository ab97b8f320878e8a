//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers the HTML pages of the user and admin panels alongside the JSON ticket API.
//! The API is collected into an OpenAPI document served through Swagger UI at `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, page},
    model::app::AppState,
};

/// Routes of the server-rendered pages.
///
/// Pages with a form accept `GET` to render it and `POST` to submit it to the same path.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page::home::root_redirect))
        .route("/user", get(page::home::user_panel))
        .route(
            "/user/tickets/create",
            get(page::ticket::ticket_create_page).post(page::ticket::submit_ticket),
        )
        .route(
            "/user/procedures/create-reservation",
            get(page::procedure::create_reservation_page)
                .post(page::procedure::submit_reservation),
        )
        .route(
            "/user/procedures/branch-cars",
            get(page::procedure::branch_cars_page).post(page::procedure::submit_branch_cars),
        )
        .route(
            "/user/procedures/car-damage-history",
            get(page::procedure::car_damage_history_page)
                .post(page::procedure::submit_car_damage_history),
        )
        .route(
            "/user/procedures/employee-performance",
            get(page::procedure::employee_performance_page)
                .post(page::procedure::submit_employee_performance),
        )
        .route(
            "/user/triggers/rental-period",
            get(page::trigger::rental_period_page).post(page::trigger::submit_rental_period),
        )
        .route(
            "/user/triggers/damage-notification",
            get(page::trigger::damage_notification_page)
                .post(page::trigger::submit_damage_record),
        )
        .route(
            "/user/triggers/salary-audit",
            get(page::trigger::salary_audit_page).post(page::trigger::submit_salary_change),
        )
        .route(
            "/user/triggers/insurance-check",
            get(page::trigger::insurance_check_page).post(page::trigger::submit_insurance),
        )
        .route("/admin", get(page::admin::admin_dashboard))
        .route("/admin/tickets", get(page::admin::ticket_list_page))
        .route("/admin/tickets/view", get(page::ticket::ticket_view_page))
        .route(
            "/admin/tickets/respond",
            get(page::ticket::ticket_respond_page).post(page::ticket::submit_response),
        )
}

/// Builds the application's HTTP router.
///
/// # Registered API Endpoints
/// - `GET /api/tickets` - List tickets with statistics
/// - `POST /api/tickets` - Create a ticket
/// - `GET /api/tickets/{id}` - Get a ticket
/// - `POST /api/tickets/{id}/responses` - Respond to a ticket
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, tickets };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Rentdesk", description = "Rentdesk support ticket API"), tags(
        (name = controller::ticket::TICKET_TAG, description = "Support ticket API routes"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::ticket::list_tickets,
            controller::ticket::create_ticket
        ))
        .routes(routes!(controller::ticket::get_ticket))
        .routes(routes!(controller::ticket::respond_ticket))
        .split_for_parts();

    page_routes()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
