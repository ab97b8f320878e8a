use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        ticket::{TicketFilterParams, TicketListDto, TicketPriority, TicketStatus},
    },
    view::components::{Area, BackLink, FlashAlerts, Layout, StatCard, TicketTable},
};

const LIST_EXCERPT_CHARS: usize = 80;

#[derive(Props, Clone, PartialEq)]
pub struct TicketListProps {
    pub flash: FlashDto,
    pub list: TicketListDto,
    /// Raw query parameters, used to keep the filter form populated
    pub params: TicketFilterParams,
}

pub fn TicketListPage(props: TicketListProps) -> Element {
    let stats = props.list.stats;
    let status_param = props.params.status.clone().unwrap_or_default();
    let priority_param = props.params.priority.clone().unwrap_or_default();
    let user_param = props.params.user.clone().unwrap_or_default();

    let status_options = TicketStatus::ALL.iter().map(|status| {
        let value = status.as_str();
        let label = status.label();
        let selected = value == status_param;

        rsx! {
            option { key: "{value}", value: value, selected: selected, "{label}" }
        }
    });

    let priority_options = TicketPriority::ALL.iter().map(|priority| {
        let value = priority.as_str();
        let label = priority.label();
        let selected = value == priority_param;

        rsx! {
            option { key: "{value}", value: value, selected: selected, "{label}" }
        }
    });

    let user_options = props.list.usernames.iter().map(|username| {
        let selected = *username == user_param;

        rsx! {
            option { key: "{username}", value: "{username}", selected: selected, "{username}" }
        }
    });

    rsx! {
        Layout { title: "Tickets".to_string(), area: Area::Admin,
            BackLink { href: "/admin".to_string(), label: "Back to Dashboard".to_string() }
            h1 { class: "h3 mb-4", "Support Tickets" }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "row row-cols-2 row-cols-md-6 g-3 mb-4",
                StatCard { label: "Total", value: stats.total, class: "bg-primary text-white" }
                StatCard { label: "Open", value: stats.open, class: "bg-success text-white" }
                StatCard { label: "In Progress", value: stats.in_progress, class: "bg-warning text-dark" }
                StatCard { label: "Closed", value: stats.closed, class: "bg-secondary text-white" }
                StatCard { label: "Urgent", value: stats.urgent, class: "bg-danger text-white" }
                StatCard { label: "High", value: stats.high, class: "bg-warning text-dark" }
            }
            div { class: "card mb-4",
                div { class: "card-body",
                    form { class: "row g-3 align-items-end", method: "get", action: "/admin/tickets",
                        div { class: "col-md-3",
                            label { class: "form-label", r#for: "status", "Status" }
                            select { class: "form-select", id: "status", name: "status",
                                option { value: "", "All Statuses" }
                                {status_options}
                            }
                        }
                        div { class: "col-md-3",
                            label { class: "form-label", r#for: "priority", "Priority" }
                            select { class: "form-select", id: "priority", name: "priority",
                                option { value: "", "All Priorities" }
                                {priority_options}
                            }
                        }
                        div { class: "col-md-3",
                            label { class: "form-label", r#for: "user", "User" }
                            select { class: "form-select", id: "user", name: "user",
                                option { value: "", "All Users" }
                                {user_options}
                            }
                        }
                        div { class: "col-md-3 d-flex gap-2",
                            button { class: "btn btn-primary", r#type: "submit", "Filter" }
                            a { class: "btn btn-outline-secondary", href: "/admin/tickets", "Reset" }
                        }
                    }
                }
            }
            div { class: "card",
                if props.list.tickets.is_empty() {
                    div { class: "card-body text-muted", "No tickets found." }
                } else {
                    TicketTable { tickets: props.list.tickets.clone(), excerpt_chars: LIST_EXCERPT_CHARS }
                }
            }
        }
    }
}
