use leptos::ev::KeyboardEvent;
use leptos::*;

/// Item awaiting confirmation. The dialog bound to it is open while a target
/// is set; confirming takes the target, cancelling drops it.
pub struct PendingConfirm<T: 'static>(RwSignal<Option<T>>);

impl<T: 'static> Clone for PendingConfirm<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PendingConfirm<T> {}

impl<T: Clone + 'static> PendingConfirm<T> {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn ask(&self, target: T) {
        self.0.set(Some(target));
    }

    pub fn take(&self) -> Option<T> {
        let target = self.0.get_untracked();
        self.0.set(None);
        target
    }

    pub fn dismiss(&self) {
        self.0.set(None);
    }

    pub fn target(&self) -> Option<T> {
        self.0.get()
    }

    pub fn is_open(&self) -> Signal<bool> {
        let slot = self.0;
        Signal::derive(move || slot.with(Option::is_some))
    }
}

impl<T: Clone + 'static> Default for PendingConfirm<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        "rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
    };

    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_label = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_label = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_label.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_confirm_hands_target_over_once() {
        let runtime = create_runtime();
        let pending = PendingConfirm::<u32>::new();
        let open = pending.is_open();
        assert!(!open.get());

        pending.ask(7);
        assert!(open.get());
        assert_eq!(pending.take(), Some(7));
        assert_eq!(pending.take(), None);
        assert!(!open.get());

        pending.ask(8);
        pending.dismiss();
        assert!(pending.target().is_none());
        runtime.dispose();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Delete employee"
                    message="Delete employee: Asha? This will also delete all their attendance records and links."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    destructive=true
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Delete employee: Asha?"));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
        assert!(html.contains("bg-action-danger-bg"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| false);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Delete"
                    message="Gone?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Delete"
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
