use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{EmployeeDto, SalaryChangeForm, SalaryLogDto, TriggerInfoDto},
    },
    server::util::format::{format_money, format_naive_timestamp},
    view::components::{Area, BackLink, FlashAlerts, Layout, SelectField, SelectOption, TriggerInfoPanel},
};

#[derive(Props, Clone, PartialEq)]
pub struct SalaryAuditProps {
    pub flash: FlashDto,
    pub employees: Vec<EmployeeDto>,
    pub form: SalaryChangeForm,
    pub logs: Vec<SalaryLogDto>,
    pub trigger: Vec<TriggerInfoDto>,
}

pub fn SalaryAuditPage(props: SalaryAuditProps) -> Element {
    let employee_options: Vec<SelectOption> = props
        .employees
        .iter()
        .map(|employee| {
            let mut option = SelectOption::from(employee);
            option.label = format!(
                "{} (Current: {})",
                option.label,
                format_money(employee.salary)
            );
            option
        })
        .collect();

    let rows = props.logs.iter().map(|log| {
        let employee = log
            .employee_name
            .clone()
            .unwrap_or_else(|| format!("Employee #{}", log.emp_id));
        let old_salary = format_money(log.old_salary);
        let new_salary = format_money(log.new_salary);
        let changed = format_naive_timestamp(&log.changed_at);

        rsx! {
            tr { key: "{log.id}",
                td { "{log.id}" }
                td { "{employee}" }
                td { "{old_salary}" }
                td { "{new_salary}" }
                td { class: "text-nowrap", "{changed}" }
            }
        }
    });

    rsx! {
        Layout { title: "Salary Change Log".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-2", "Salary Change Log" }
            p { class: "text-muted mb-4",
                "The database records the old and new value whenever an employee salary changes."
            }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "row g-4",
                div { class: "col-lg-5",
                    div { class: "card",
                        div { class: "card-header", "Change Salary" }
                        div { class: "card-body",
                            form { method: "post", action: "/user/triggers/salary-audit",
                                SelectField {
                                    name: "emp_id",
                                    label: "Employee",
                                    placeholder: "Select an employee...",
                                    options: employee_options,
                                    selected: props.form.emp_id.clone()
                                }
                                div { class: "mb-3",
                                    label { class: "form-label", r#for: "new_salary", "New Salary" }
                                    input {
                                        class: "form-control",
                                        id: "new_salary",
                                        name: "new_salary",
                                        r#type: "number",
                                        step: "0.01",
                                        min: "0",
                                        required: true,
                                        value: "{props.form.new_salary}"
                                    }
                                }
                                button { class: "btn btn-primary", r#type: "submit", "Update Salary" }
                            }
                        }
                    }
                }
                div { class: "col-lg-7",
                    div { class: "card",
                        div { class: "card-header", "Recent Salary Changes" }
                        if props.logs.is_empty() {
                            div { class: "card-body text-muted", "No salary changes logged yet." }
                        } else {
                            table { class: "table table-sm mb-0",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Employee" }
                                        th { "Old Salary" }
                                        th { "New Salary" }
                                        th { "Changed" }
                                    }
                                }
                                tbody { {rows} }
                            }
                        }
                    }
                }
            }
            TriggerInfoPanel { triggers: props.trigger.clone() }
        }
    }
}
