use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};
use chrono::Utc;

use crate::{
    model::{
        api::FlashDto,
        rental::{DamageRecordForm, InsuranceForm, RentalPeriodForm, SalaryChangeForm},
    },
    server::{
        controller::page::{recover, report},
        data::trigger_catalog::trigger_name,
        model::app::AppState,
        service::{reference::ReferenceService, trigger::TriggerService},
        util::format::format_money,
    },
    view::{
        pages::trigger::{
            DamageNotificationPage, DamageNotificationProps, InsuranceCheckPage,
            InsuranceCheckProps, RentalPeriodPage, RentalPeriodProps, SalaryAuditPage,
            SalaryAuditProps,
        },
        render_page,
    },
};

async fn rental_period_view(
    state: &AppState,
    mut flash: FlashDto,
    form: RentalPeriodForm,
) -> Html<String> {
    let trigger_service = TriggerService::new(&state.db);

    let periods = recover(
        "Failed to load rental periods",
        trigger_service.get_recent_rental_periods().await,
        &mut flash,
    );
    let trigger = recover(
        "Failed to load trigger information",
        trigger_service
            .get_trigger_info(trigger_name::RENTAL_PERIOD_CHECK)
            .await,
        &mut flash,
    );

    render_page(
        RentalPeriodPage,
        RentalPeriodProps {
            flash,
            form,
            periods,
            trigger,
        },
    )
}

/// Render the rental period trigger page
pub async fn rental_period_page(State(state): State<AppState>) -> impl IntoResponse {
    rental_period_view(&state, FlashDto::default(), RentalPeriodForm::default()).await
}

/// Insert a test rental period, the database rejects periods ending before they start
pub async fn submit_rental_period(
    State(state): State<AppState>,
    Form(form): Form<RentalPeriodForm>,
) -> impl IntoResponse {
    let trigger_service = TriggerService::new(&state.db);

    match trigger_service.add_rental_period(&form).await {
        Ok(_) => {
            let flash = FlashDto::success("Test rental period added. Trigger executed!");

            rental_period_view(&state, flash, RentalPeriodForm::default()).await
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to add rental period", err, &mut flash);

            rental_period_view(&state, flash, form).await
        }
    }
}

async fn damage_notification_view(
    state: &AppState,
    mut flash: FlashDto,
    form: DamageRecordForm,
) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let trigger_service = TriggerService::new(&state.db);

    let cars = recover(
        "Failed to load cars",
        reference_service.get_cars().await,
        &mut flash,
    );
    let notifications = recover(
        "Failed to load notifications",
        trigger_service.get_recent_notifications().await,
        &mut flash,
    );
    let trigger = recover(
        "Failed to load trigger information",
        trigger_service
            .get_trigger_info(trigger_name::DAMAGE_NOTIFICATION)
            .await,
        &mut flash,
    );

    render_page(
        DamageNotificationPage,
        DamageNotificationProps {
            flash,
            cars,
            form,
            notifications,
            trigger,
        },
    )
}

/// Render the damage notification trigger page
pub async fn damage_notification_page(State(state): State<AppState>) -> impl IntoResponse {
    damage_notification_view(&state, FlashDto::default(), DamageRecordForm::default()).await
}

/// Insert a test damage record dated today
pub async fn submit_damage_record(
    State(state): State<AppState>,
    Form(form): Form<DamageRecordForm>,
) -> impl IntoResponse {
    let trigger_service = TriggerService::new(&state.db);

    match trigger_service.add_damage_record(&form).await {
        Ok(_) => {
            let flash = FlashDto::success(
                "Test damage record added. Trigger executed! Check the notifications table.",
            );

            damage_notification_view(&state, flash, DamageRecordForm::default()).await
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to add damage record", err, &mut flash);

            damage_notification_view(&state, flash, form).await
        }
    }
}

async fn salary_audit_view(
    state: &AppState,
    mut flash: FlashDto,
    form: SalaryChangeForm,
) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let trigger_service = TriggerService::new(&state.db);

    let employees = recover(
        "Failed to load employees",
        reference_service.get_employees().await,
        &mut flash,
    );
    let logs = recover(
        "Failed to load salary change log",
        trigger_service.get_recent_salary_logs().await,
        &mut flash,
    );
    let trigger = recover(
        "Failed to load trigger information",
        trigger_service.get_trigger_info(trigger_name::SALARY_AUDIT).await,
        &mut flash,
    );

    render_page(
        SalaryAuditPage,
        SalaryAuditProps {
            flash,
            employees,
            form,
            logs,
            trigger,
        },
    )
}

/// Render the salary audit trigger page
pub async fn salary_audit_page(State(state): State<AppState>) -> impl IntoResponse {
    salary_audit_view(&state, FlashDto::default(), SalaryChangeForm::default()).await
}

/// Change an employee salary, which the database records in the salary change log
pub async fn submit_salary_change(
    State(state): State<AppState>,
    Form(form): Form<SalaryChangeForm>,
) -> impl IntoResponse {
    let trigger_service = TriggerService::new(&state.db);

    match trigger_service.change_salary(&form).await {
        Ok(change) => {
            let flash = FlashDto::success(format!(
                "Employee '{}' salary updated from {} to {}. Trigger executed!",
                change.employee_name,
                format_money(change.old_salary),
                format_money(change.new_salary)
            ));

            salary_audit_view(&state, flash, SalaryChangeForm::default()).await
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to change salary", err, &mut flash);

            salary_audit_view(&state, flash, form).await
        }
    }
}

async fn insurance_check_view(
    state: &AppState,
    mut flash: FlashDto,
    form: InsuranceForm,
) -> Html<String> {
    let reference_service = ReferenceService::new(&state.db);
    let trigger_service = TriggerService::new(&state.db);

    let cars = recover(
        "Failed to load cars",
        reference_service.get_cars().await,
        &mut flash,
    );
    let insurances = recover(
        "Failed to load insurance records",
        trigger_service.get_recent_insurances().await,
        &mut flash,
    );
    let trigger = recover(
        "Failed to load trigger information",
        trigger_service
            .get_trigger_info(trigger_name::INSURANCE_CHECK)
            .await,
        &mut flash,
    );

    render_page(
        InsuranceCheckPage,
        InsuranceCheckProps {
            flash,
            cars,
            form,
            insurances,
            trigger,
            today: Utc::now().date_naive(),
        },
    )
}

/// Render the insurance check trigger page
pub async fn insurance_check_page(State(state): State<AppState>) -> impl IntoResponse {
    insurance_check_view(&state, FlashDto::default(), InsuranceForm::default()).await
}

/// Insert a test insurance policy, the database rejects policies not ending after they start
pub async fn submit_insurance(
    State(state): State<AppState>,
    Form(form): Form<InsuranceForm>,
) -> impl IntoResponse {
    let trigger_service = TriggerService::new(&state.db);

    match trigger_service.add_insurance(&form).await {
        Ok(_) => {
            let flash = FlashDto::success("Test insurance record added. Trigger executed!");

            insurance_check_view(&state, flash, InsuranceForm::default()).await
        }
        Err(err) => {
            let mut flash = FlashDto::default();
            report("Failed to add insurance", err, &mut flash);

            insurance_check_view(&state, flash, form).await
        }
    }
}
