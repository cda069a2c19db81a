use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineError(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2" role="alert">
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .and_then(|e| e.status)
                        .filter(|status| *status >= 500)
                        .map(|status| view! { <div class="text-xs opacity-75">{format!("HTTP {}", status)}</div> })
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn InlineSuccess(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded my-2">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Transient progress text such as "Getting your location...".
#[component]
pub fn InlineInfo(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-info-bg border border-status-info-border text-status-info-text px-4 py-2 rounded my-2 text-sm">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}
