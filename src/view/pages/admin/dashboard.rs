use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        ticket::{TicketDto, TicketStatsDto},
    },
    view::components::{Area, FlashAlerts, Layout, StatCard, TicketTable},
};

const DASHBOARD_EXCERPT_CHARS: usize = 100;

#[derive(Props, Clone, PartialEq)]
pub struct AdminDashboardProps {
    pub flash: FlashDto,
    pub stats: TicketStatsDto,
    pub recent: Vec<TicketDto>,
}

pub fn AdminDashboardPage(props: AdminDashboardProps) -> Element {
    let stats = props.stats;

    rsx! {
        Layout { title: "Admin Dashboard".to_string(), area: Area::Admin,
            h1 { class: "h3 mb-4", "Admin Dashboard" }
            FlashAlerts { flash: props.flash.clone() }
            h2 { class: "h5 mb-3", "Ticket Statistics" }
            div { class: "row row-cols-2 row-cols-md-5 g-3 mb-4",
                StatCard { label: "Total Tickets", value: stats.total, class: "bg-primary text-white" }
                StatCard { label: "Open", value: stats.open, class: "bg-success text-white" }
                StatCard { label: "In Progress", value: stats.in_progress, class: "bg-warning text-dark" }
                StatCard { label: "Closed", value: stats.closed, class: "bg-secondary text-white" }
                StatCard { label: "Urgent", value: stats.urgent, class: "bg-danger text-white" }
            }
            div { class: "card",
                div { class: "card-header d-flex justify-content-between align-items-center",
                    span { "Recent Tickets" }
                    a { class: "btn btn-sm btn-primary", href: "/admin/tickets", "View All" }
                }
                if props.recent.is_empty() {
                    div { class: "card-body text-muted", "No tickets have been created yet." }
                } else {
                    TicketTable { tickets: props.recent.clone(), excerpt_chars: DASHBOARD_EXCERPT_CHARS }
                }
            }
        }
    }
}
