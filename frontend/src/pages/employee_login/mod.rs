mod panel;
mod repository;
mod view_model;

pub use panel::EmployeeLoginPanel;

use leptos::*;

#[component]
pub fn EmployeeLoginPage() -> impl IntoView {
    view! { <EmployeeLoginPanel /> }
}
