use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::RequesterDto,
        ticket::{RespondTicketDto, TicketDto, TicketStatus},
    },
    view::{
        components::{Area, BackLink, FlashAlerts, Layout},
        pages::admin::{
            requester::RequesterCard,
            ticket_view::{ResponseList, TicketDetails},
        },
    },
};

/// Author name prefilled into the response form.
pub const DEFAULT_RESPONDER_NAME: &str = "Support Team";

#[derive(Props, Clone, PartialEq)]
pub struct TicketRespondProps {
    pub flash: FlashDto,
    pub ticket: Option<TicketDto>,
    pub requester: Option<RequesterDto>,
    pub form: RespondTicketDto,
}

#[component]
fn ResponseForm(ticket: TicketDto, form: RespondTicketDto) -> Element {
    let action = format!("/admin/tickets/respond?id={}", ticket.id);
    let admin_name = form
        .admin_name
        .clone()
        .unwrap_or_else(|| DEFAULT_RESPONDER_NAME.to_string());
    let selected_status = form
        .status
        .as_deref()
        .and_then(|status| status.parse::<TicketStatus>().ok())
        .unwrap_or(ticket.status);

    let status_options = TicketStatus::ALL.iter().map(|status| {
        let value = status.as_str();
        let label = status.label();
        let selected = *status == selected_status;

        rsx! {
            option { key: "{value}", value: value, selected: selected, "{label}" }
        }
    });

    rsx! {
        div { class: "card",
            div { class: "card-header", "Add Response" }
            div { class: "card-body",
                form { method: "post", action: action,
                    div { class: "mb-3",
                        label { class: "form-label", r#for: "admin_name", "Your Name" }
                        input {
                            class: "form-control",
                            id: "admin_name",
                            name: "admin_name",
                            r#type: "text",
                            value: "{admin_name}"
                        }
                    }
                    div { class: "mb-3",
                        label { class: "form-label", r#for: "response", "Response" }
                        textarea {
                            class: "form-control",
                            id: "response",
                            name: "response",
                            rows: "5",
                            required: true,
                            "{form.response}"
                        }
                    }
                    div { class: "mb-3",
                        label { class: "form-label", r#for: "status", "Ticket Status" }
                        select { class: "form-select", id: "status", name: "status",
                            {status_options}
                        }
                    }
                    button { class: "btn btn-success", r#type: "submit", "Send Response" }
                }
            }
        }
    }
}

pub fn TicketRespondPage(props: TicketRespondProps) -> Element {
    rsx! {
        Layout { title: "Respond to Ticket".to_string(), area: Area::Admin,
            BackLink { href: "/admin/tickets".to_string(), label: "Back to Tickets".to_string() }
            FlashAlerts { flash: props.flash.clone() }
            if let Some(ticket) = props.ticket.clone() {
                div { class: "row",
                    div { class: "col-lg-7",
                        TicketDetails { ticket: ticket.clone() }
                        ResponseList { ticket: ticket.clone() }
                    }
                    div { class: "col-lg-5",
                        RequesterCard { requester: props.requester.clone() }
                        ResponseForm { ticket: ticket.clone(), form: props.form.clone() }
                    }
                }
            }
        }
    }
}
