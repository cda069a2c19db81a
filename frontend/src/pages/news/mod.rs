mod panel;
mod repository;

pub use panel::NewsPanel;
pub use repository::{news_card, NewsCard, NewsRepository};

use leptos::*;

#[component]
pub fn NewsPage() -> impl IntoView {
    view! { <NewsPanel /> }
}
