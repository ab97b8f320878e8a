use dioxus::prelude::*;

use crate::{
    model::ticket::{TicketDto, TicketStatus},
    server::util::format::{excerpt, format_timestamp},
    view::components::{PriorityBadge, StatusBadge},
};

/// Ticket rows with links to the detail page, closed tickets get no respond action.
#[component]
pub fn TicketTable(tickets: Vec<TicketDto>, excerpt_chars: usize) -> Element {
    let rows = tickets.iter().map(|ticket| {
        let short_id = ticket.short_id().to_string();
        let summary = excerpt(&ticket.description, excerpt_chars);
        let created = format_timestamp(&ticket.created_at);
        let view_href = format!("/admin/tickets/view?id={}", ticket.id);
        let respond_href = format!("/admin/tickets/respond?id={}", ticket.id);
        let can_respond = ticket.status != TicketStatus::Closed;

        rsx! {
            tr { key: "{ticket.id}",
                td { code { "#{short_id}" } }
                td { "{ticket.username}" }
                td {
                    div { class: "fw-semibold", "{ticket.subject}" }
                    small { class: "text-muted", "{summary}" }
                }
                td { PriorityBadge { priority: ticket.priority } }
                td { StatusBadge { status: ticket.status } }
                td { "{created}" }
                td { class: "text-nowrap",
                    a { class: "btn btn-sm btn-outline-primary me-1", href: view_href, "View" }
                    if can_respond {
                        a { class: "btn btn-sm btn-outline-success", href: respond_href, "Respond" }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "table-responsive",
            table { class: "table table-hover align-middle mb-0",
                thead {
                    tr {
                        th { "ID" }
                        th { "User" }
                        th { "Subject" }
                        th { "Priority" }
                        th { "Status" }
                        th { "Created" }
                        th { "Actions" }
                    }
                }
                tbody { {rows} }
            }
        }
    }
}
