mod panel;
mod repository;
mod view_model;

pub use panel::AdminLoginPanel;

use leptos::*;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <AdminLoginPanel /> }
}
