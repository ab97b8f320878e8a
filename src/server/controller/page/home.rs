use axum::response::{IntoResponse, Redirect};

use crate::view::{pages::user::UserPanelPage, render_static_page};

/// Redirect the site root to the user panel
pub async fn root_redirect() -> impl IntoResponse {
    Redirect::to("/user")
}

/// Render the user panel with links to every demo page
pub async fn user_panel() -> impl IntoResponse {
    render_static_page(UserPanelPage)
}
