use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{RentalPeriodDto, RentalPeriodForm, TriggerInfoDto},
    },
    view::components::{Area, BackLink, DateField, FlashAlerts, Layout, TriggerInfoPanel},
};

#[derive(Props, Clone, PartialEq)]
pub struct RentalPeriodProps {
    pub flash: FlashDto,
    pub form: RentalPeriodForm,
    pub periods: Vec<RentalPeriodDto>,
    pub trigger: Vec<TriggerInfoDto>,
}

pub fn RentalPeriodPage(props: RentalPeriodProps) -> Element {
    let rows = props.periods.iter().map(|period| {
        let days = period.days();

        rsx! {
            tr { key: "{period.id}",
                td { "{period.id}" }
                td { "{period.start_date}" }
                td { "{period.end_date}" }
                td { "{days}" }
            }
        }
    });

    rsx! {
        Layout { title: "Rental Period Check".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-2", "Rental Period Check" }
            p { class: "text-muted mb-4",
                "The database rejects any rental period whose end date is before its start date."
            }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "row g-4",
                div { class: "col-lg-5",
                    div { class: "card",
                        div { class: "card-header", "Add Test Rental Period" }
                        div { class: "card-body",
                            form { method: "post", action: "/user/triggers/rental-period",
                                DateField { name: "start_date", label: "Start Date", value: props.form.start_date.clone() }
                                DateField { name: "end_date", label: "End Date", value: props.form.end_date.clone() }
                                button { class: "btn btn-primary", r#type: "submit", "Add Rental Period" }
                            }
                        }
                    }
                }
                div { class: "col-lg-7",
                    div { class: "card",
                        div { class: "card-header", "Recent Rental Periods" }
                        if props.periods.is_empty() {
                            div { class: "card-body text-muted", "No rental periods yet." }
                        } else {
                            table { class: "table table-sm mb-0",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Start" }
                                        th { "End" }
                                        th { "Days" }
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
