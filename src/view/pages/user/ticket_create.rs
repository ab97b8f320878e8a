use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::DirectoryUserDto,
        ticket::{CreateTicketDto, TicketPriority},
    },
    view::components::{Area, BackLink, FlashAlerts, Layout},
};

#[derive(Props, Clone, PartialEq)]
pub struct TicketCreateProps {
    pub flash: FlashDto,
    pub users: Vec<DirectoryUserDto>,
    /// Values echoed back into the form after a rejected submission
    pub form: CreateTicketDto,
}

pub fn TicketCreatePage(props: TicketCreateProps) -> Element {
    let selected_priority = props
        .form
        .priority
        .as_deref()
        .and_then(|priority| priority.parse::<TicketPriority>().ok())
        .unwrap_or_default();

    let user_options = props.users.iter().map(|user| {
        let label = format!("{} ({})", user.name, user.kind.label());
        let key = user.key();
        let selected = user.name == props.form.username;

        rsx! {
            option { key: "{key}", value: "{user.name}", selected: selected, "{label}" }
        }
    });

    let priority_options = TicketPriority::ALL.iter().map(|priority| {
        let value = priority.as_str();
        let label = priority.label();
        let selected = *priority == selected_priority;

        rsx! {
            option { key: "{value}", value: value, selected: selected, "{label}" }
        }
    });

    rsx! {
        Layout { title: "Create Ticket".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-4", "Create New Ticket" }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "card",
                div { class: "card-body",
                    form { method: "post", action: "/user/tickets/create",
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "username", "User" }
                            select { class: "form-select", id: "username", name: "username", required: true,
                                option { value: "", "Select a user..." }
                                {user_options}
                            }
                        }
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "subject", "Subject" }
                            input {
                                class: "form-control",
                                id: "subject",
                                name: "subject",
                                r#type: "text",
                                required: true,
                                value: "{props.form.subject}"
                            }
                        }
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "description", "Description" }
                            textarea {
                                class: "form-control",
                                id: "description",
                                name: "description",
                                rows: "5",
                                required: true,
                                "{props.form.description}"
                            }
                        }
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "priority", "Priority" }
                            select { class: "form-select", id: "priority", name: "priority",
                                {priority_options}
                            }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Create Ticket" }
                    }
                }
            }
        }
    }
}
