use crate::state::navigation::{use_navigator, Page};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center bg-surface px-4 text-center">
            <h1 class="text-5xl font-extrabold text-fg">"404"</h1>
            <p class="mt-3 text-fg-muted">"We couldn't find that page."</p>
            <button
                type="button"
                class="mt-6 rounded-md px-6 py-2 text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                on:click=move |_| navigator.navigate(Page::Home)
            >
                "Back to Home"
            </button>
        </div>
    }
}
