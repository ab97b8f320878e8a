use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBolt, FaDatabase, FaHeadset};
use dioxus_free_icons::Icon;

use crate::view::components::{Area, Layout};

#[component]
fn PanelLink(href: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        a { class: "list-group-item list-group-item-action", href: href,
            div { class: "fw-semibold", "{title}" }
            small { class: "text-muted", "{description}" }
        }
    }
}

pub fn UserPanelPage() -> Element {
    rsx! {
        Layout { title: "User Panel".to_string(), area: Area::User,
            h1 { class: "h3 mb-4", "User Panel" }
            div { class: "row g-4",
                div { class: "col-lg-4",
                    div { class: "card h-100",
                        div { class: "card-header d-flex align-items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaBolt }
                            "Triggers"
                        }
                        div { class: "list-group list-group-flush",
                            PanelLink {
                                href: "/user/triggers/rental-period",
                                title: "Rental Period Check",
                                description: "Rejects rental periods that end before they start."
                            }
                            PanelLink {
                                href: "/user/triggers/damage-notification",
                                title: "Damage Record Notification",
                                description: "Creates a notification for every new damage record."
                            }
                            PanelLink {
                                href: "/user/triggers/salary-audit",
                                title: "Salary Change Log",
                                description: "Logs every employee salary change."
                            }
                            PanelLink {
                                href: "/user/triggers/insurance-check",
                                title: "Insurance Date Check",
                                description: "Validates the dates of new insurance policies."
                            }
                        }
                    }
                }
                div { class: "col-lg-4",
                    div { class: "card h-100",
                        div { class: "card-header d-flex align-items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaDatabase }
                            "Stored Procedures"
                        }
                        div { class: "list-group list-group-flush",
                            PanelLink {
                                href: "/user/procedures/create-reservation",
                                title: "Create New Reservation",
                                description: "Books a car for a customer over a rental period."
                            }
                            PanelLink {
                                href: "/user/procedures/branch-cars",
                                title: "Get Branch Cars",
                                description: "Lists the cars stationed at a branch."
                            }
                            PanelLink {
                                href: "/user/procedures/car-damage-history",
                                title: "Car Damage History",
                                description: "Shows the damage records of a car."
                            }
                            PanelLink {
                                href: "/user/procedures/employee-performance",
                                title: "Employee Performance Report",
                                description: "Shows an employee with their branch assignments."
                            }
                        }
                    }
                }
                div { class: "col-lg-4",
                    div { class: "card h-100",
                        div { class: "card-header d-flex align-items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaHeadset }
                            "Support"
                        }
                        div { class: "list-group list-group-flush",
                            PanelLink {
                                href: "/user/tickets/create",
                                title: "Create New Ticket",
                                description: "Ask the support team for help."
                            }
                        }
                    }
                }
            }
        }
    }
}
