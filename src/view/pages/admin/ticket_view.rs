use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::RequesterDto,
        ticket::{TicketDto, TicketStatus},
    },
    server::util::format::format_timestamp,
    view::{
        components::{Area, BackLink, FlashAlerts, Layout, PriorityBadge, StatusBadge},
        pages::admin::requester::RequesterCard,
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct TicketViewProps {
    pub flash: FlashDto,
    pub ticket: Option<TicketDto>,
    pub requester: Option<RequesterDto>,
}

/// Ticket header, body and metadata shared by the view and respond pages.
#[component]
pub fn TicketDetails(ticket: TicketDto) -> Element {
    let short_id = ticket.short_id().to_string();
    let created = format_timestamp(&ticket.created_at);
    let updated = format_timestamp(&ticket.updated_at);

    rsx! {
        div { class: "card mb-4",
            div { class: "card-header d-flex justify-content-between align-items-center",
                span { class: "fw-semibold", "#{short_id} {ticket.subject}" }
                span { class: "d-flex gap-2",
                    PriorityBadge { priority: ticket.priority }
                    StatusBadge { status: ticket.status }
                }
            }
            div { class: "card-body",
                p { class: "card-text", style: "white-space: pre-wrap;", "{ticket.description}" }
            }
            div { class: "card-footer small text-muted",
                "Submitted by {ticket.username} on {created}, last updated {updated}"
            }
        }
    }
}

#[component]
pub fn ResponseList(ticket: TicketDto) -> Element {
    let responses = ticket.responses.iter().enumerate().map(|(index, response)| {
        let created = format_timestamp(&response.created_at);

        rsx! {
            li { key: "{index}", class: "list-group-item",
                div { class: "d-flex justify-content-between",
                    strong { "{response.author}" }
                    small { class: "text-muted", "{created}" }
                }
                p { class: "mb-0", style: "white-space: pre-wrap;", "{response.message}" }
            }
        }
    });

    let count = ticket.responses.len();

    rsx! {
        div { class: "card mb-4",
            div { class: "card-header", "Responses ({count})" }
            if ticket.responses.is_empty() {
                div { class: "card-body text-muted", "No responses yet." }
            } else {
                ul { class: "list-group list-group-flush", {responses} }
            }
        }
    }
}

pub fn TicketViewPage(props: TicketViewProps) -> Element {
    rsx! {
        Layout { title: "Ticket Details".to_string(), area: Area::Admin,
            BackLink { href: "/admin/tickets".to_string(), label: "Back to Tickets".to_string() }
            FlashAlerts { flash: props.flash.clone() }
            if let Some(ticket) = props.ticket.clone() {
                div { class: "row",
                    div { class: "col-lg-8",
                        TicketDetails { ticket: ticket.clone() }
                        ResponseList { ticket: ticket.clone() }
                    }
                    div { class: "col-lg-4",
                        RequesterCard { requester: props.requester.clone() }
                        if ticket.status != TicketStatus::Closed {
                            a {
                                class: "btn btn-success w-100",
                                href: format!("/admin/tickets/respond?id={}", ticket.id),
                                "Respond"
                            }
                        }
                    }
                }
            }
        }
    }
}
