use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{CarDamageForm, CarDto, DamageRecordDto},
    },
    server::util::format::format_money,
    view::components::{options, Area, BackLink, FlashAlerts, Layout, SelectField},
};

#[derive(Props, Clone, PartialEq)]
pub struct CarDamageHistoryProps {
    pub flash: FlashDto,
    pub cars: Vec<CarDto>,
    pub form: CarDamageForm,
    pub records: Option<Vec<DamageRecordDto>>,
}

pub fn CarDamageHistoryPage(props: CarDamageHistoryProps) -> Element {
    let records = props.records.clone().unwrap_or_default();
    let total = format_money(records.iter().map(|record| record.repair_cost).sum());
    let rows = records.iter().map(|record| {
        let cost = format_money(record.repair_cost);

        rsx! {
            tr { key: "{record.id}",
                td { "{record.id}" }
                td { "{record.record_date}" }
                td { "{record.description}" }
                td { class: "text-end", "{cost}" }
            }
        }
    });

    rsx! {
        Layout { title: "Car Damage History".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-4", "Car Damage History" }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "card mb-4",
                div { class: "card-body",
                    form { method: "post", action: "/user/procedures/car-damage-history",
                        SelectField {
                            name: "car_id",
                            label: "Car",
                            placeholder: "Select a car...",
                            options: options(&props.cars),
                            selected: props.form.car_id.clone()
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Execute Procedure" }
                    }
                }
            }
            if props.records.is_some() {
                div { class: "card",
                    div { class: "card-header", "Damage Records" }
                    if records.is_empty() {
                        div { class: "card-body text-muted", "No damage records found for this car." }
                    } else {
                        table { class: "table table-sm mb-0",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Date" }
                                    th { "Description" }
                                    th { class: "text-end", "Repair Cost" }
                                }
                            }
                            tbody { {rows} }
                            tfoot {
                                tr {
                                    th { colspan: "3", "Total" }
                                    th { class: "text-end", "{total}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
