use dioxus::prelude::*;

use crate::model::api::FlashDto;

/// Success and error banners of a page, either may be absent.
#[component]
pub fn FlashAlerts(flash: FlashDto) -> Element {
    rsx! {
        if let Some(success) = &flash.success {
            div { class: "alert alert-success", role: "alert", "{success}" }
        }
        if let Some(error) = &flash.error {
            div { class: "alert alert-danger", role: "alert", "{error}" }
        }
    }
}
