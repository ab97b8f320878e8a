use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

#[component]
pub fn BackLink(href: String, label: String) -> Element {
    rsx! {
        a { class: "btn btn-outline-secondary btn-sm mb-3 d-inline-flex align-items-center gap-1", href: href,
            Icon { width: 12, height: 12, icon: FaArrowLeft }
            "{label}"
        }
    }
}
