use super::view_model::AdminTab;
use leptos::*;

#[component]
pub fn AdminTabBar(tab: RwSignal<AdminTab>) -> impl IntoView {
    view! {
        <nav class="flex gap-2 overflow-x-auto rounded-xl bg-surface-muted p-2" aria-label="Admin sections">
            {AdminTab::ALL
                .iter()
                .map(|&item| {
                    let class = move || {
                        if tab.get() == item {
                            "shrink-0 rounded-lg px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                        } else {
                            "shrink-0 rounded-lg px-4 py-2 text-sm font-semibold text-fg-muted hover:bg-action-ghost-bg-hover"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            aria-pressed=move || (tab.get() == item).to_string()
                            on:click=move |_| tab.set(item)
                        >
                            <span aria-hidden="true">{item.icon()}</span>
                            <span class="ml-2">{item.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn AdminDashboardFrame(on_logout: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface pt-24 pb-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 space-y-8">
                <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-fg">"Admin Dashboard"</h1>
                        <p class="mt-1 text-sm text-fg-muted">"Manage website content and postings"</p>
                    </div>
                    <button
                        type="button"
                        class="rounded-lg px-6 py-2 text-sm font-semibold bg-status-error-bg text-status-error-text hover:opacity-80"
                        on:click=move |_| on_logout.call(())
                    >
                        "Logout"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
