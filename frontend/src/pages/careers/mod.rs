mod panel;
mod repository;
mod view_model;

pub use panel::CareersPanel;
pub use repository::CareersRepository;

use leptos::*;

pub const CAREERS_EMAIL: &str = "careers@magmarine.in";

#[component]
pub fn CareersPage() -> impl IntoView {
    view! { <CareersPanel /> }
}
