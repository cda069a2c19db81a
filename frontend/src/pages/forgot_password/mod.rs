use crate::state::session::Role;
use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::ForgotPasswordPanel;

/// Reset-link request for the admin account or for the employee picked on
/// the employee portal.
#[component]
pub fn ForgotPasswordPage(role: Role) -> impl IntoView {
    view! { <ForgotPasswordPanel role=role /> }
}
