use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{CarDto, CreateReservationForm, CustomerDto, ReservationSummaryDto},
    },
    view::components::{options, Area, BackLink, DateField, FlashAlerts, Layout, SelectField},
};

#[derive(Props, Clone, PartialEq)]
pub struct CreateReservationProps {
    pub flash: FlashDto,
    pub customers: Vec<CustomerDto>,
    pub cars: Vec<CarDto>,
    pub form: CreateReservationForm,
    pub recent: Vec<ReservationSummaryDto>,
}

fn or_na<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn CreateReservationPage(props: CreateReservationProps) -> Element {
    let rows = props.recent.iter().map(|reservation| {
        let customer = or_na(&reservation.customer_name);
        let plate = or_na(&reservation.plate_number);
        let start = or_na(&reservation.start_date);
        let end = or_na(&reservation.end_date);

        rsx! {
            tr { key: "{reservation.id}",
                td { "{reservation.id}" }
                td { "{reservation.res_date}" }
                td { "{customer}" }
                td { "{plate}" }
                td { "{start}" }
                td { "{end}" }
            }
        }
    });

    rsx! {
        Layout { title: "Create Reservation".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-4", "Create New Reservation" }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "row g-4",
                div { class: "col-lg-5",
                    div { class: "card",
                        div { class: "card-body",
                            form { method: "post", action: "/user/procedures/create-reservation",
                                SelectField {
                                    name: "cus_id",
                                    label: "Customer",
                                    placeholder: "Select a customer...",
                                    options: options(&props.customers),
                                    selected: props.form.cus_id.clone()
                                }
                                SelectField {
                                    name: "car_id",
                                    label: "Car",
                                    placeholder: "Select a car...",
                                    options: options(&props.cars),
                                    selected: props.form.car_id.clone()
                                }
                                DateField { name: "start_date", label: "Start Date", value: props.form.start_date.clone() }
                                DateField { name: "end_date", label: "End Date", value: props.form.end_date.clone() }
                                button { class: "btn btn-primary", r#type: "submit", "Create Reservation" }
                            }
                        }
                    }
                }
                div { class: "col-lg-7",
                    div { class: "card",
                        div { class: "card-header", "Recent Reservations" }
                        if props.recent.is_empty() {
                            div { class: "card-body text-muted", "No reservations yet." }
                        } else {
                            table { class: "table table-sm mb-0",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Date" }
                                        th { "Customer" }
                                        th { "Car" }
                                        th { "Start" }
                                        th { "End" }
                                    }
                                }
                                tbody { {rows} }
                            }
                        }
                    }
                }
            }
        }
    }
}
