use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{EmployeeDto, PerformanceForm, PerformanceRowDto},
    },
    server::util::format::format_money,
    view::components::{options, Area, BackLink, FlashAlerts, Layout, SelectField},
};

#[derive(Props, Clone, PartialEq)]
pub struct EmployeePerformanceProps {
    pub flash: FlashDto,
    pub employees: Vec<EmployeeDto>,
    pub form: PerformanceForm,
    pub rows: Option<Vec<PerformanceRowDto>>,
}

pub fn EmployeePerformancePage(props: EmployeePerformanceProps) -> Element {
    let rows = props.rows.clone().unwrap_or_default();
    let table_rows = rows.iter().enumerate().map(|(index, row)| {
        let salary = format_money(row.salary);
        let branch = row
            .branch_location
            .clone()
            .unwrap_or_else(|| "Unassigned".to_string());
        let since = row
            .since_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        rsx! {
            tr { key: "{index}",
                td { "{row.emp_id}" }
                td { "{row.full_name}" }
                td { "{row.position}" }
                td { "{salary}" }
                td { "{branch}" }
                td { "{since}" }
            }
        }
    });

    rsx! {
        Layout { title: "Employee Performance".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-4", "Employee Performance Report" }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "card mb-4",
                div { class: "card-body",
                    form { method: "post", action: "/user/procedures/employee-performance",
                        SelectField {
                            name: "emp_id",
                            label: "Employee",
                            placeholder: "Select an employee...",
                            options: options(&props.employees),
                            selected: props.form.emp_id.clone()
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Execute Procedure" }
                    }
                }
            }
            if props.rows.is_some() {
                div { class: "card",
                    div { class: "card-header", "Performance Report" }
                    if rows.is_empty() {
                        div { class: "card-body text-muted", "No data found for this employee." }
                    } else {
                        table { class: "table table-sm mb-0",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Name" }
                                    th { "Position" }
                                    th { "Salary" }
                                    th { "Branch" }
                                    th { "Since" }
                                }
                            }
                            tbody { {table_rows} }
                        }
                    }
                }
            }
        }
    }
}
