use super::{view_model::use_contact_view_model, CONTACT_EMAIL, OFFICES};
use crate::components::messages::{InlineError, InlineSuccess};
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-4 py-3 text-form-control-text placeholder-form-control-placeholder focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn ContactPanel() -> impl IntoView {
    let vm = use_contact_view_model();
    let form = vm.form;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let field = move |label: &'static str, signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <div>
                <label class="block text-sm font-medium text-fg mb-2">{label}</label>
                <input
                    type=kind
                    class=INPUT_CLASS
                    placeholder=placeholder
                    prop:value=signal
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"Contact Us"</h1>
                <p class="mt-3 text-center text-fg-muted">
                    {format!("Write to us at {} or use the form below.", CONTACT_EMAIL)}
                </p>
                <div class="mt-10 max-w-3xl mx-auto rounded-lg border border-border bg-surface-elevated p-6 shadow-sm">
                    <h2 class="text-2xl font-bold text-fg mb-6 text-center">"Send us a Message"</h2>
                    <InlineSuccess message=vm.success />
                    <InlineError error=vm.error />
                    <form
                        class="space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit_action.dispatch(form.to_request());
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field("Name *", form.name, "text", "Your name")}
                            {field("Email *", form.email, "email", "your@email.com")}
                            {field("Phone", form.phone, "tel", "+91 1234567890")}
                            {field("Subject *", form.subject, "text", "Subject")}
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-fg mb-2">"Message *"</label>
                            <textarea
                                rows="5"
                                class=INPUT_CLASS
                                placeholder="Tell us how we can help you..."
                                prop:value=form.message
                                on:input=move |ev| form.message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full rounded-md py-3 text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
                <div class="mt-16">
                    <h2 class="text-3xl font-bold text-fg text-center mb-8">"Our Locations"</h2>
                    <div class="flex overflow-x-auto gap-6 pb-6">
                        {OFFICES
                            .iter()
                            .map(|office| view! {
                                <div class="flex-shrink-0 w-80 rounded-lg border border-border bg-surface-elevated p-5">
                                    <h3 class="text-lg font-bold text-fg">{office.name}</h3>
                                    <p class="mt-2 text-sm text-fg-muted">{office.address}</p>
                                    <p class="mt-2 text-sm text-fg">{office.phone}</p>
                                    <p class="text-sm text-fg">{CONTACT_EMAIL}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
