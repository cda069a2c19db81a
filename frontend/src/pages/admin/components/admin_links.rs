use super::{DraftInput, FormActions, DANGER_LINK, EDIT_LINK, PRIMARY_BUTTON};
use crate::{
    api::AdminLink,
    components::{
        confirm_dialog::{ConfirmDialog, PendingConfirm},
        messages::EmptyState,
    },
    pages::admin::{
        repository::AdminRepository,
        utils::AdminLinkDraft,
        view_model::{log_load_failure, run_and_report},
    },
    state::{
        crud::CrudController,
        navigation::{use_navigator, Navigator},
    },
    utils::{lifetime::ComponentLifetime, notify, time::display_stored_date},
};
use leptos::{ev, *};

fn saved_message(editing: bool) -> String {
    if editing {
        "Link updated successfully!".into()
    } else {
        "Link added successfully!".into()
    }
}

/// `created_at` arrives as an ISO timestamp; only the day is shown.
fn added_on(created_at: Option<&str>) -> Option<String> {
    let day = created_at?.get(..10)?;
    Some(format!("Added {}", display_stored_date(day)))
}

#[component]
pub fn AdminLinkCard(
    link: AdminLink,
    on_edit: Callback<AdminLink>,
    on_delete: Callback<AdminLink>,
) -> impl IntoView {
    let edit_target = link.clone();
    let delete_target = link.clone();
    let url = link.url.clone();
    view! {
        <li class="rounded-lg border border-border bg-surface p-4 space-y-2">
            <div class="flex items-start justify-between gap-3">
                <div class="min-w-0">
                    <h4 class="font-semibold text-fg">{format!("📎 {}", link.name)}</h4>
                    <p class="truncate text-xs text-fg-muted">{link.url.clone()}</p>
                    {added_on(link.created_at.as_deref())
                        .map(|text| view! { <p class="text-xs text-fg-muted">{text}</p> })}
                </div>
                <button type="button" class=PRIMARY_BUTTON on:click=move |_| notify::open_external(&url)>
                    "Open"
                </button>
            </div>
            <div class="flex gap-3">
                <button type="button" class=EDIT_LINK on:click=move |_| on_edit.call(edit_target.clone())>
                    "Edit"
                </button>
                <button type="button" class=DANGER_LINK on:click=move |_| on_delete.call(delete_target.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
pub fn AdminLinksTab(repository: AdminRepository) -> impl IntoView {
    let controller = store_value(CrudController::new(repository.admin_links()));
    let CrudController {
        items,
        draft,
        editing,
        pending,
        ..
    } = controller.get_value();
    let lifetime = ComponentLifetime::bind();
    let pending_delete = PendingConfirm::<AdminLink>::new();
    let navigator = store_value(use_navigator());

    {
        let lifetime = lifetime.clone();
        create_effect(move |_| {
            let controller = controller.get_value();
            lifetime.spawn(async move { log_load_failure("admin links", controller.reload().await) });
        });
    }

    let on_submit = {
        let lifetime = lifetime.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.get_value();
            let success = saved_message(editing.with_untracked(Option::is_some));
            run_and_report(&lifetime, async move { controller.submit().await }, "save link", success);
        }
    };

    let on_confirm_delete = Callback::new(move |_| {
        if let Some(link) = pending_delete.take() {
            let controller = controller.get_value();
            run_and_report(
                &lifetime,
                async move { controller.delete(&link.id).await },
                "delete link",
                "Link deleted successfully!".into(),
            );
        }
    });

    let on_edit = Callback::new(move |link: AdminLink| {
        controller.with_value(|c| c.begin_edit(&link));
        navigator.with_value(Navigator::scroll_to_top);
    });

    let is_editing = Signal::derive(move || editing.with(Option::is_some));
    let field = move |get: fn(&AdminLinkDraft) -> String| Signal::derive(move || draft.with(get));
    let delete_message = Signal::derive(move || {
        pending_delete
            .target()
            .map(|link| format!("Delete link: {}?", link.name))
            .unwrap_or_default()
    });

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
            <form class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-fg">
                    {move || if is_editing.get() { "✏️ Edit Link" } else { "➕ Add New Link" }}
                </h3>
                <DraftInput
                    label="Link Name"
                    placeholder="e.g., Monthly Budget Tracker"
                    value=field(|d| d.name.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.name = v))
                />
                <DraftInput
                    label="Sheet URL"
                    input_type="url"
                    placeholder="https://docs.google.com/spreadsheets/..."
                    value=field(|d| d.url.clone())
                    on_input=Callback::new(move |v| draft.update(|d| d.url = v))
                />
                <p class="text-xs text-fg-muted">
                    "Give your links descriptive names so you can find them easily"
                </p>
                <FormActions
                    editing=is_editing
                    pending=pending
                    add_label="➕ Add Link"
                    update_label="💾 Update Link"
                    on_cancel=Callback::new(move |_| controller.with_value(|c| c.cancel_edit()))
                />
            </form>
            <div class="lg:col-span-2 rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4">
                <div>
                    <h3 class="text-lg font-semibold text-fg">"My Links"</h3>
                    <p class="text-xs text-fg-muted">"Links are sorted by creation date (newest first)"</p>
                </div>
                <Show
                    when=move || items.with(|links| !links.is_empty())
                    fallback=|| view! { <EmptyState title="No links added yet. Add your first link above!" /> }
                >
                    <ul class="grid grid-cols-1 gap-3 md:grid-cols-2">
                        <For
                            each=move || items.get()
                            key=|link| link.id.clone()
                            children=move |link| view! {
                                <AdminLinkCard
                                    link=link
                                    on_edit=on_edit
                                    on_delete=Callback::new(move |link| pending_delete.ask(link))
                                />
                            }
                        />
                    </ul>
                </Show>
                <p class="text-xs text-fg-muted">"Click \"Open\" to view the link in a new tab"</p>
            </div>
            <ConfirmDialog
                is_open=pending_delete.is_open()
                title="Delete link"
                message=delete_message
                confirm_label="Delete"
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.dismiss())
                destructive=true
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_on_shows_the_day_only() {
        assert_eq!(
            added_on(Some("2025-03-04T10:15:00.123456")).as_deref(),
            Some("Added Tue, Mar 4, 2025")
        );
        assert_eq!(added_on(None), None);
        assert_eq!(added_on(Some("soon")), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page;

    #[test]
    fn card_shows_name_url_and_open_button() {
        let html = render_page(|| {
            let link = AdminLink {
                id: "l1".into(),
                name: "Monthly Budget Tracker".into(),
                url: "https://docs.google.com/spreadsheets/d/abc".into(),
                created_at: None,
            };
            view! {
                <AdminLinkCard link=link on_edit=Callback::new(|_| {}) on_delete=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("📎 Monthly Budget Tracker"));
        assert!(html.contains(&"https://docs.google.com/spreadsheets/d/abc".replace('/', "&#x2F;")));
        assert!(html.contains("Open"));
    }
}
