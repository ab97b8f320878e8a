use rentdesk::server::service::reservation::ReservationService;

use super::*;

async fn rental_context() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_rental_tables()
        .with_branch("Downtown")
        .with_branch("Airport")
        .with_customer("Jane Doe")
        .with_employee("Mark Lee", "Manager", 4200.0)
        .with_car("DT-100", Some(1))
        .with_car("AP-200", Some(2))
        .build()
        .await
}

/// Expect customer and car dropdowns on the reservation form
#[tokio::test]
async fn reservation_form_lists_choices() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (status, html) = get_page(&state, "/user/procedures/create-reservation").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Jane Doe (+1 555 0101)"));
    assert!(html.contains("DT-100 - Toyota (2022)"));
    assert!(html.contains("No reservations yet."));

    Ok(())
}

/// Expect the new reservation in the recent list after submitting
#[tokio::test]
async fn reservation_submit_creates_reservation() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (status, html) = post_form(
        &state,
        "/user/procedures/create-reservation",
        "cus_id=1&car_id=2&start_date=2025-03-01&end_date=2025-03-05",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("New reservation created successfully! Procedure executed."));
    assert!(html.contains("2025-03-05"));

    let recent = ReservationService::new(&state.db)
        .get_recent_reservations()
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].plate_number.as_deref(), Some("AP-200"));

    Ok(())
}

/// Expect a banner and no reservation for a malformed date
#[tokio::test]
async fn reservation_rejects_bad_date() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(
        &state,
        "/user/procedures/create-reservation",
        "cus_id=1&car_id=1&start_date=01.03.2025&end_date=2025-03-05",
    )
    .await;

    assert!(html.contains("alert-danger"));
    assert!(html.contains("No reservations yet."));

    Ok(())
}

/// Expect a selection prompt when no branch was chosen
#[tokio::test]
async fn branch_cars_requires_branch() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (status, html) = post_form(&state, "/user/procedures/branch-cars", "branch_id=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please select a branch."));
    assert!(!html.contains("Cars at Branch"));

    Ok(())
}

/// Expect only the cars of the selected branch
#[tokio::test]
async fn branch_cars_lists_branch_cars() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(&state, "/user/procedures/branch-cars", "branch_id=2").await;

    assert!(html.contains("Procedure executed successfully!"));
    assert!(html.contains("Cars at Branch"));
    assert!(html.contains("<td>AP-200</td>"));
    assert!(!html.contains("<td>DT-100</td>"));

    Ok(())
}

/// Expect damage records of the car with formatted costs
#[tokio::test]
async fn car_damage_history_lists_records() -> Result<(), TestError> {
    let mut test = rental_context().await?;
    test.rental()
        .insert_damage_record(1, "Scratched door", 1250.5, factory::date(2025, 2, 1)?)
        .await?;
    let state = test.into_app_state();

    let (_, html) = post_form(&state, "/user/procedures/car-damage-history", "car_id=1").await;

    assert!(html.contains("Scratched door"));
    assert!(html.contains("$1,250.50"));

    let (_, html) = post_form(&state, "/user/procedures/car-damage-history", "car_id=2").await;
    assert!(html.contains("No damage records found for this car."));

    Ok(())
}

/// Expect an unassigned employee to be reported without a branch
#[tokio::test]
async fn employee_performance_shows_unassigned() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(&state, "/user/procedures/employee-performance", "emp_id=1").await;

    assert!(html.contains("Mark Lee"));
    assert!(html.contains("Unassigned"));
    assert!(html.contains("$4,200.00"));

    Ok(())
}
