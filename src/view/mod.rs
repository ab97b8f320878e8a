//! Server-rendered HTML pages.
//!
//! Pages are dioxus components rendered to a string once per request with `dioxus-ssr`.
//! Nothing is hydrated on the client, forms post back to the same URL.

pub mod components;
pub mod pages;
pub mod render;

pub use render::{render_page, render_static_page};
