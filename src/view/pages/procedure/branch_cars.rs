use dioxus::prelude::*;

use crate::{
    model::{
        api::FlashDto,
        rental::{BranchCarsForm, BranchDto, CarDto},
    },
    view::components::{options, Area, BackLink, FlashAlerts, Layout, SelectField},
};

#[derive(Props, Clone, PartialEq)]
pub struct BranchCarsProps {
    pub flash: FlashDto,
    pub branches: Vec<BranchDto>,
    pub form: BranchCarsForm,
    /// `None` until a branch has been submitted
    pub cars: Option<Vec<CarDto>>,
}

pub fn BranchCarsPage(props: BranchCarsProps) -> Element {
    rsx! {
        Layout { title: "Branch Cars".to_string(), area: Area::User,
            BackLink { href: "/user".to_string(), label: "Back to User Panel".to_string() }
            h1 { class: "h3 mb-4", "Get Branch Cars" }
            FlashAlerts { flash: props.flash.clone() }
            div { class: "card mb-4",
                div { class: "card-body",
                    form { method: "post", action: "/user/procedures/branch-cars",
                        SelectField {
                            name: "branch_id",
                            label: "Branch",
                            placeholder: "Select a branch...",
                            options: options(&props.branches),
                            selected: props.form.branch_id.clone()
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Execute Procedure" }
                    }
                }
            }
            if let Some(cars) = &props.cars {
                div { class: "card",
                    div { class: "card-header", "Cars at Branch" }
                    if cars.is_empty() {
                        div { class: "card-body text-muted", "No cars found for this branch." }
                    } else {
                        table { class: "table table-sm mb-0",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Plate Number" }
                                    th { "Brand" }
                                    th { "Year" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for car in cars.iter() {
                                    tr { key: "{car.id}",
                                        td { "{car.id}" }
                                        td { "{car.plate_number}" }
                                        td { "{car.brand}" }
                                        td { "{car.model_year}" }
                                        td { "{car.status}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
