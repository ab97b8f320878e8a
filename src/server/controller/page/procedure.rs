use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};

use crate::{
    model::{
        api::FlashDto,
        rental::{BranchCarsForm, CarDamageForm, CreateReservationForm, PerformanceForm},
    },
    server::{
        controller::page::{recover, report},
        model::app::AppState,
        service::{
            reference::ReferenceService, report::ReportService,
            reservation::ReservationService,
        },
    },
    view::{
        pages::procedure::{
            BranchCarsPage, BranchCarsProps, CarDamageHistoryPage, CarDamageHistoryProps,
            CreateReservationPage, CreateReservationProps, EmployeePerformancePage,
            EmployeePerformanceProps,
        },
        render_page,
    },
};

static PROCEDURE_SUCCESS: &str = "Procedure executed successfully!";

async fn create_reservation_view(
    state: &AppState,
    mut flash: FlashDto,
    form: CreateReservationForm,
) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let reservation_service = ReservationService::new(&state.db);

    let customers = recover(
        "Failed to load customers",
        reference_service.get_customers().await,
        &mut flash,
    );
    let cars = recover(
        "Failed to load cars",
        reference_service.get_cars().await,
        &mut flash,
    );
    let recent = recover(
        "Failed to load recent reservations",
        reservation_service.get_recent_reservations().await,
        &mut flash,
    );

    render_page(
        CreateReservationPage,
        CreateReservationProps {
            flash,
            customers,
            cars,
            form,
            recent,
        },
    )
}

/// Render the reservation form with the most recent reservations
pub async fn create_reservation_page(State(state): State<AppState>) -> impl IntoResponse {
    create_reservation_view(&state, FlashDto::default(), CreateReservationForm::default()).await
}

/// Create a reservation with its rental period and link rows
pub async fn submit_reservation(
    State(state): State<AppState>,
    Form(form): Form<CreateReservationForm>,
) -> impl IntoResponse {
    let reservation_service = ReservationService::new(&state.db);

    match reservation_service.create_reservation(&form).await {
        Ok(_) => {
            let flash =
                FlashDto::success("New reservation created successfully! Procedure executed.");

            create_reservation_view(&state, flash, CreateReservationForm::default()).await
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to create reservation", err, &mut flash);

            create_reservation_view(&state, flash, form).await
        }
    }
}

/// Render the branch cars report, listing cars once a branch was submitted
async fn branch_cars_view(state: &AppState, form: Option<BranchCarsForm>) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let report_service = ReportService::new(&state.db);
    let mut flash = FlashDto::default();

    let cars = match &form {
        Some(form) => match report_service.get_branch_cars(form).await {
            Ok(cars) => {
                flash.success = Some(PROCEDURE_SUCCESS.to_string());
                Some(cars)
            }
            Err(err) => {
                report("Failed to load branch cars", err, &mut flash);
                None
            }
        },
        None => None,
    };
    let branches = recover(
        "Failed to load branches",
        reference_service.get_branches().await,
        &mut flash,
    );

    render_page(
        BranchCarsPage,
        BranchCarsProps {
            flash,
            branches,
            form: form.unwrap_or_default(),
            cars,
        },
    )
}

pub async fn branch_cars_page(State(state): State<AppState>) -> impl IntoResponse {
    branch_cars_view(&state, None).await
}

pub async fn submit_branch_cars(
    State(state): State<AppState>,
    Form(form): Form<BranchCarsForm>,
) -> impl IntoResponse {
    branch_cars_view(&state, Some(form)).await
}

async fn car_damage_history_view(state: &AppState, form: Option<CarDamageForm>) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let report_service = ReportService::new(&state.db);
    let mut flash = FlashDto::default();

    let records = match &form {
        Some(form) => match report_service.get_car_damage_history(form).await {
            Ok(records) => {
                flash.success = Some(PROCEDURE_SUCCESS.to_string());
                Some(records)
            }
            Err(err) => {
                report("Failed to load car damage history", err, &mut flash);
                None
            }
        },
        None => None,
    };
    let cars = recover(
        "Failed to load cars",
        reference_service.get_cars().await,
        &mut flash,
    );

    render_page(
        CarDamageHistoryPage,
        CarDamageHistoryProps {
            flash,
            cars,
            form: form.unwrap_or_default(),
            records,
        },
    )
}

pub async fn car_damage_history_page(State(state): State<AppState>) -> impl IntoResponse {
    car_damage_history_view(&state, None).await
}

pub async fn submit_car_damage_history(
    State(state): State<AppState>,
    Form(form): Form<CarDamageForm>,
) -> impl IntoResponse {
    car_damage_history_view(&state, Some(form)).await
}

async fn employee_performance_view(
    state: &AppState,
    form: Option<PerformanceForm>,
) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let report_service = ReportService::new(&state.db);
    let mut flash = FlashDto::default();

    let rows = match &form {
        Some(form) => match report_service.get_employee_performance(form).await {
            Ok(rows) => {
                flash.success = Some(PROCEDURE_SUCCESS.to_string());
                Some(rows)
            }
            Err(err) => {
                report("Failed to load employee performance", err, &mut flash);
                None
            }
        },
        None => None,
    };
    let employees = recover(
        "Failed to load employees",
        reference_service.get_employees().await,
        &mut flash,
    );

    render_page(
        EmployeePerformancePage,
        EmployeePerformanceProps {
            flash,
            employees,
            form: form.unwrap_or_default(),
            rows,
        },
    )
}

pub async fn employee_performance_page(State(state): State<AppState>) -> impl IntoResponse {
    employee_performance_view(&state, None).await
}

pub async fn submit_employee_performance(
    State(state): State<AppState>,
    Form(form): Form<PerformanceForm>,
) -> impl IntoResponse {
    employee_performance_view(&state, Some(form)).await
}
