use rentdesk::server::data::employee::EmployeeRepository;

use super::*;

async fn rental_context() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_rental_tables()
        .with_branch("Downtown")
        .with_employee("Mark Lee", "Manager", 4200.0)
        .with_car("DT-100", Some(1))
        .build()
        .await
}

/// Expect a new rental period with its length in days
#[tokio::test]
async fn rental_period_is_added() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (status, html) = post_form(
        &state,
        "/user/triggers/rental-period",
        "start_date=2025-04-01&end_date=2025-04-08",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Test rental period added. Trigger executed!"));
    assert!(html.contains("<td>7</td>"));

    Ok(())
}

/// Expect the trigger panel to explain that no catalogue is available
#[tokio::test]
async fn trigger_info_unavailable_on_sqlite() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = get_page(&state, "/user/triggers/rental-period").await;

    assert!(html.contains("Trigger Information"));
    assert!(html.contains("Trigger details are not available for this database."));

    Ok(())
}

/// Expect a banner when a damage record is submitted without a cost
#[tokio::test]
async fn damage_record_requires_all_fields() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(
        &state,
        "/user/triggers/damage-notification",
        "car_id=1&damage_description=Dent&damage_cost=",
    )
    .await;

    assert!(html.contains("Please fill in all fields."));

    Ok(())
}

/// Expect stored notifications to be listed with the car plate
#[tokio::test]
async fn damage_page_lists_notifications() -> Result<(), TestError> {
    let mut test = rental_context().await?;
    test.rental()
        .insert_notification(1, "Damage recorded: Dent")
        .await?;
    let state = test.into_app_state();

    let (_, html) = get_page(&state, "/user/triggers/damage-notification").await;

    assert!(html.contains("Damage recorded: Dent"));
    assert!(html.contains("<td>DT-100</td>"));

    Ok(())
}

/// Expect the salary to change and the change to be reported
#[tokio::test]
async fn salary_change_is_applied() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(
        &state,
        "/user/triggers/salary-audit",
        "emp_id=1&new_salary=4500",
    )
    .await;

    assert!(html.contains("salary updated from $4,200.00 to $4,500.00. Trigger executed!"));
    assert!(html.contains("(Current: $4,500.00)"));

    let employee = EmployeeRepository::new(&state.db)
        .find_by_id(1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(employee.salary, 4500.0);

    Ok(())
}

/// Expect an unchanged salary to be rejected
#[tokio::test]
async fn salary_change_rejects_same_value() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(
        &state,
        "/user/triggers/salary-audit",
        "emp_id=1&new_salary=4200.00",
    )
    .await;

    assert!(html.contains("Salary not changed (same value)."));

    Ok(())
}

/// Expect a banner for an employee that does not exist
#[tokio::test]
async fn salary_change_unknown_employee() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(
        &state,
        "/user/triggers/salary-audit",
        "emp_id=42&new_salary=100",
    )
    .await;

    assert!(html.contains("Employee not found."));

    Ok(())
}

/// Expect the new policy to be listed with its activity badge
#[tokio::test]
async fn insurance_is_added() -> Result<(), TestError> {
    let test = rental_context().await?;
    let state = test.into_app_state();

    let (_, html) = post_form(
        &state,
        "/user/triggers/insurance-check",
        "car_id=1&policy_num=POL-7781&start_date=2020-01-01&end_date=2021-01-01",
    )
    .await;

    assert!(html.contains("Test insurance record added. Trigger executed!"));
    assert!(html.contains("POL-7781"));
    assert!(html.contains("Expired"));

    Ok(())
}
