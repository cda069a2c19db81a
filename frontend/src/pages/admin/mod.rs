use crate::{components::guard::RequireSession, state::session::Role};
use leptos::*;

pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AdminPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Admin>
            <AdminPanel />
        </RequireSession>
    }
}
