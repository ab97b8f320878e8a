use dioxus::prelude::*;

use crate::model::rental::RequesterDto;

/// Customer or employee record matching a ticket's username.
#[component]
pub fn RequesterCard(requester: Option<RequesterDto>) -> Element {
    let Some(requester) = requester else {
        return rsx! {
            div { class: "card mb-4",
                div { class: "card-header", "Requester" }
                div { class: "card-body text-muted", "No customer or employee matches this username." }
            }
        };
    };
    let kind = requester.kind.label();

    rsx! {
        div { class: "card mb-4",
            div { class: "card-header", "Requester" }
            div { class: "card-body",
                p { class: "mb-1",
                    strong { "Type: " }
                    "{kind}"
                }
                p { class: "mb-1",
                    strong { "Info: " }
                    "{requester.details}"
                }
                if let Some(email) = &requester.email {
                    p { class: "mb-0",
                        strong { "Email: " }
                        "{email}"
                    }
                }
            }
        }
    }
}
