use dioxus::prelude::*;

use crate::model::ticket::{TicketPriority, TicketStatus};

#[component]
pub fn PriorityBadge(priority: TicketPriority) -> Element {
    let class = format!("badge {}", priority.badge_class());
    let label = priority.label();

    rsx! {
        span { class: class, "{label}" }
    }
}

#[component]
pub fn StatusBadge(status: TicketStatus) -> Element {
    let class = format!("badge {}", status.badge_class());
    let label = status.label();

    rsx! {
        span { class: class, "{label}" }
    }
}
