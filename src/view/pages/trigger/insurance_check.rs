use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{CarDto, InsuranceDto, InsuranceForm, TriggerInfoDto},
    },
    view::components::{
        options, Area, BackLink, DateField, FlashAlerts, Layout, SelectField, TriggerInfoPanel,
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct InsuranceCheckProps {
    pub flash: FlashDto,
    pub cars: Vec<CarDto>,
    pub form: InsuranceForm,
    pub insurances: Vec<InsuranceDto>,
    pub trigger: Vec<TriggerInfoDto>,
    /// Date policies are checked against for the active badge
    pub today: NaiveDate,
}

pub fn InsuranceCheckPage(props: InsuranceCheckProps) -> Element {
    let rows = props.insurances.iter().map(|insurance| {
        let plate = insurance
            .plate_number
            .clone()
            .unwrap_or_else(|| format!("Car #{}", insurance.car_id));
        let active = insurance.is_active(props.today);

        rsx! {
            tr { key: "{insurance.id}",
                td { "{insurance.id}" }
                td { "{plate}" }
                td { code { "{insurance.policy_num}" } }
                td { "{insurance.start_date}" }
                td { "{insurance.end_date}" }
                td {
                    if active {
                        span { class: "badge bg-success", "Active" }
                    } else {
                        span { class: "badge bg-danger", "Expired" }
                    }
                }
            }
        }
    });

    rsx! {
        Layout { title: "Insurance Check".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-2", "Insurance Date Check" }
            p { class: "text-muted mb-4",
                "The database rejects insurance policies whose end date is not after the start date."
            }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "row g-4",
                div { class: "col-lg-5",
                    div { class: "card",
                        div { class: "card-header", "Add Test Insurance" }
                        div { class: "card-body",
                            form { method: "post", action: "/user/triggers/insurance-check",
                                SelectField {
                                    name: "car_id",
                                    label: "Car",
                                    placeholder: "Select a car...",
                                    options: options(&props.cars),
                                    selected: props.form.car_id.clone()
                                }
                                div { class: "mb-3",
                                    label { class: "form-label", r#for: "policy_num", "Policy Number" }
                                    input {
                                        class: "form-control",
                                        id: "policy_num",
                                        name: "policy_num",
                                        r#type: "text",
                                        required: true,
                                        value: "{props.form.policy_num}"
                                    }
                                }
                                DateField { name: "start_date", label: "Start Date", value: props.form.start_date.clone() }
                                DateField { name: "end_date", label: "End Date", value: props.form.end_date.clone() }
                                button { class: "btn btn-primary", r#type: "submit", "Add Insurance" }
                            }
                        }
                    }
                }
                div { class: "col-lg-7",
                    div { class: "card",
                        div { class: "card-header", "Recent Insurance Records" }
                        if props.insurances.is_empty() {
                            div { class: "card-body text-muted", "No insurance records yet." }
                        } else {
                            table { class: "table table-sm mb-0",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Car" }
                                        th { "Policy" }
                                        th { "Start" }
                                        th { "End" }
                                        th { "Status" }
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
