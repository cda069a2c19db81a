use crate::state::session::Role;
use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::ResetPasswordPanel;

/// Landing page for `?token=...` links; `type=employee` selects the employee
/// variant.
#[component]
pub fn ResetPasswordPage(role: Role) -> impl IntoView {
    view! { <ResetPasswordPanel role=role /> }
}
