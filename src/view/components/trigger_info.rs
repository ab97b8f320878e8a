use dioxus::prelude::*;

use crate::model::rental::TriggerInfoDto;

/// Catalogue entry of the database trigger a page exercises.
#[component]
pub fn TriggerInfoPanel(triggers: Vec<TriggerInfoDto>) -> Element {
    rsx! {
        div { class: "card mt-4",
            div { class: "card-header", "Trigger Information" }
            div { class: "card-body",
                if triggers.is_empty() {
                    p { class: "text-muted mb-0", "Trigger details are not available for this database." }
                }
                for trigger in triggers.iter() {
                    dl { key: "{trigger.name}", class: "row mb-0",
                        dt { class: "col-sm-3", "Name" }
                        dd { class: "col-sm-9", code { "{trigger.name}" } }
                        dt { class: "col-sm-3", "Event" }
                        dd { class: "col-sm-9", "{trigger.timing} {trigger.event}" }
                        dt { class: "col-sm-3", "Table" }
                        dd { class: "col-sm-9", "{trigger.table_name}" }
                        dt { class: "col-sm-3", "Statement" }
                        dd { class: "col-sm-9",
                            pre { class: "bg-light p-2 mb-0", "{trigger.statement}" }
                        }
                    }
                }
            }
        }
    }
}
