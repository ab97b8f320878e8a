use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{CarDto, DamageRecordForm, NotificationDto, TriggerInfoDto},
    },
    server::util::format::format_naive_timestamp,
    view::components::{options, Area, BackLink, FlashAlerts, Layout, SelectField, TriggerInfoPanel},
};

#[derive(Props, Clone, PartialEq)]
pub struct DamageNotificationProps {
    pub flash: FlashDto,
    pub cars: Vec<CarDto>,
    pub form: DamageRecordForm,
    pub notifications: Vec<NotificationDto>,
    pub trigger: Vec<TriggerInfoDto>,
}

pub fn DamageNotificationPage(props: DamageNotificationProps) -> Element {
    let rows = props.notifications.iter().map(|notification| {
        let plate = notification
            .plate_number
            .clone()
            .unwrap_or_else(|| format!("Car #{}", notification.car_id));
        let created = format_naive_timestamp(&notification.created_at);

        rsx! {
            tr { key: "{notification.id}",
                td { "{notification.id}" }
                td { "{plate}" }
                td { "{notification.message}" }
                td { class: "text-nowrap", "{created}" }
            }
        }
    });

    rsx! {
        Layout { title: "Damage Notification".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-2", "Damage Record Notification" }
            p { class: "text-muted mb-4",
                "Every new damage record makes the database write a notification for the car."
            }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "row g-4",
                div { class: "col-lg-5",
                    div { class: "card",
                        div { class: "card-header", "Add Test Damage Record" }
                        div { class: "card-body",
                            form { method: "post", action: "/user/triggers/damage-notification",
                                SelectField {
                                    name: "car_id",
                                    label: "Car",
                                    placeholder: "Select a car...",
                                    options: options(&props.cars),
                                    selected: props.form.car_id.clone()
                                }
                                div { class: "mb-3",
                                    label { class: "form-label", r#for: "damage_description", "Description" }
                                    textarea {
                                        class: "form-control",
                                        id: "damage_description",
                                        name: "damage_description",
                                        rows: "3",
                                        required: true,
                                        "{props.form.damage_description}"
                                    }
                                }
                                div { class: "mb-3",
                                    label { class: "form-label", r#for: "damage_cost", "Repair Cost" }
                                    input {
                                        class: "form-control",
                                        id: "damage_cost",
                                        name: "damage_cost",
                                        r#type: "number",
                                        step: "0.01",
                                        min: "0",
                                        required: true,
                                        value: "{props.form.damage_cost}"
                                    }
                                }
                                button { class: "btn btn-primary", r#type: "submit", "Add Damage Record" }
                            }
                        }
                    }
                }
                div { class: "col-lg-7",
                    div { class: "card",
                        div { class: "card-header", "Recent Notifications" }
                        if props.notifications.is_empty() {
                            div { class: "card-body text-muted", "No notifications yet." }
                        } else {
                            table { class: "table table-sm mb-0",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Car" }
                                        th { "Message" }
                                        th { "Created" }
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
