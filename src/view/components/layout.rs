use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCar, FaHeadset, FaUser};
use dioxus_free_icons::Icon;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Which half of the application a page belongs to, highlighted in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    User,
    Admin,
}

#[component]
pub fn Layout(title: String, area: Area, children: Element) -> Element {
    let user_class = if area == Area::User {
        "nav-link active d-flex align-items-center gap-1"
    } else {
        "nav-link d-flex align-items-center gap-1"
    };
    let admin_class = if area == Area::Admin {
        "nav-link active d-flex align-items-center gap-1"
    } else {
        "nav-link d-flex align-items-center gap-1"
    };

    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1"
                }
                title { "{title} | Car Rental" }
                link { rel: "stylesheet", href: BOOTSTRAP_CSS }
            }
            body { class: "bg-light",
                nav { class: "navbar navbar-expand navbar-dark bg-dark mb-4",
                    div { class: "container",
                        a { class: "navbar-brand d-flex align-items-center gap-2", href: "/user",
                            Icon { width: 20, height: 20, icon: FaCar }
                            "Car Rental"
                        }
                        ul { class: "navbar-nav",
                            li { class: "nav-item",
                                a { class: user_class, href: "/user",
                                    Icon { width: 14, height: 14, icon: FaUser }
                                    "User Panel"
                                }
                            }
                            li { class: "nav-item",
                                a { class: admin_class, href: "/admin",
                                    Icon { width: 14, height: 14, icon: FaHeadset }
                                    "Admin Panel"
                                }
                            }
                        }
                    }
                }
                main { class: "container pb-5",
                    {children}
                }
            }
        }
    }
}
