use dioxus::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: u64, class: &'static str) -> Element {
    let card_class = format!("card text-center {}", class);

    rsx! {
        div { class: "col",
            div { class: card_class,
                div { class: "card-body",
                    h3 { class: "card-title mb-0", "{value}" }
                    small { "{label}" }
                }
            }
        }
    }
}
