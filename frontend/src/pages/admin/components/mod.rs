use leptos::*;

pub mod admin_links;
pub mod attendance;
pub mod careers;
pub mod employee_links;
pub mod employees;
pub mod news;

pub const FIELD_CLASS: &str =
    "mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";
pub const PRIMARY_BUTTON: &str =
    "rounded-md px-4 py-2 text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50";
pub const GHOST_BUTTON: &str =
    "rounded-md px-4 py-2 text-sm font-semibold text-fg bg-surface-muted hover:bg-action-ghost-bg-hover";
pub const DANGER_LINK: &str = "text-sm font-medium text-status-error-text hover:underline";
pub const EDIT_LINK: &str = "text-sm font-medium text-link hover:underline";

/// Labelled text input bound to one field of a draft.
#[component]
pub fn DraftInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <input
                type=input_type
                class=FIELD_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn DraftTextArea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg">
            {label}
            <textarea
                rows="4"
                class=FIELD_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Submit plus, while editing, a cancel button.
#[component]
pub fn FormActions(
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    add_label: &'static str,
    update_label: &'static str,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            <button type="submit" class=PRIMARY_BUTTON disabled=move || pending.get()>
                {move || if editing.get() { update_label } else { add_label }}
            </button>
            <Show when=move || editing.get()>
                <button type="button" class=GHOST_BUTTON on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
