use axum::response::Html;
use dioxus::prelude::*;

/// Renders a page component with its props into a complete HTML document.
pub fn render_page<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Html<String> {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();

    Html(format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom)))
}

/// Renders a page component without props.
pub fn render_static_page(root: fn() -> Element) -> Html<String> {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();

    Html(format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom)))
}
