use super::{FIELD_CLASS, GHOST_BUTTON, PRIMARY_BUTTON};
use crate::{
    api::{ApiError, Employee, LinkConfigItem},
    components::confirm_dialog::{ConfirmDialog, PendingConfirm},
    pages::admin::{
        repository::AdminRepository,
        view_model::{log_load_failure, run_and_report},
    },
    state::links::{link_icon, LinksDraft},
    utils::lifetime::ComponentLifetime,
};
use leptos::*;
use std::future::Future;

pub fn delete_links_prompt(employee_name: Option<&str>) -> String {
    format!(
        "Delete all links for {}?",
        employee_name.unwrap_or("this employee")
    )
}

pub fn link_saved_message(key: &str) -> String {
    format!("{} Link updated successfully!", link_icon(key))
}

/// Keeps the link buttons disabled while `work` runs.
fn run_locked<F>(
    lifetime: &ComponentLifetime,
    busy: RwSignal<bool>,
    work: F,
    action: &'static str,
    success: String,
) where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    busy.set(true);
    let work = async move {
        let result = work.await;
        busy.set(false);
        result
    };
    run_and_report(lifetime, work, action, success);
}

#[component]
fn LinkField(
    item: LinkConfigItem,
    draft: RwSignal<LinksDraft>,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<String>,
) -> impl IntoView {
    let key = store_value(item.key.clone());
    let value = move || draft.with(|d| d.value(&key.get_value()));
    let dirty = move || draft.with(|d| d.is_key_dirty(&key.get_value()));
    let has_url = move || !value().trim().is_empty();

    view! {
        <div class="rounded-lg border border-border bg-surface p-4 space-y-2">
            <div class="flex items-center justify-between">
                <span class="text-sm font-semibold text-fg">
                    {format!("{} {}", link_icon(&item.key), item.name)}
                </span>
                <Show
                    when=has_url
                    fallback=|| view! { <span class="text-xs text-fg-muted">"No URL set"</span> }
                >
                    <a
                        class="text-xs text-link hover:underline"
                        href=value
                        target="_blank"
                        rel="noopener noreferrer"
                        title="Open link"
                    >
                        "Open"
                    </a>
                </Show>
            </div>
            <input
                type="url"
                class=FIELD_CLASS
                placeholder="https://docs.google.com/spreadsheets/..."
                prop:value=value
                on:input=move |ev| draft.update(|d| d.set(&key.get_value(), event_target_value(&ev)))
            />
            <Show when=dirty>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class=PRIMARY_BUTTON
                        disabled=move || busy.get()
                        on:click=move |_| on_save.call(key.get_value())
                    >
                        "💾 Save"
                    </button>
                    <button
                        type="button"
                        class=GHOST_BUTTON
                        on:click=move |_| draft.update(|d| d.revert_key(&key.get_value()))
                    >
                        "Revert"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Per-employee quick links. Each configured key can be saved on its own or
/// all at once; `selected` is cleared by the caller when that employee goes.
#[component]
pub fn EmployeeLinksManager(
    repository: AdminRepository,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    selected: RwSignal<Option<u32>>,
) -> impl IntoView {
    let repository = store_value(repository);
    let config = create_rw_signal(Vec::<LinkConfigItem>::new());
    let draft = create_rw_signal(LinksDraft::default());
    let busy = create_rw_signal(false);
    let lifetime = ComponentLifetime::bind();
    let pending_clear = PendingConfirm::<u32>::new();

    {
        let lifetime = lifetime.clone();
        create_effect(move |_| {
            let repo = repository.get_value();
            lifetime.spawn(async move {
                let loaded = repo.links_config().await.map(|items| config.set(items));
                log_load_failure("links config", loaded);
            });
        });
    }

    {
        let lifetime = lifetime.clone();
        create_effect(move |_| {
            let items = config.get();
            match selected.get() {
                None => draft.set(LinksDraft::empty(&items)),
                Some(employee_id) => {
                    let repo = repository.get_value();
                    lifetime.spawn(async move {
                        let fetched = repo.employee_links(employee_id).await;
                        if selected.get_untracked() != Some(employee_id) {
                            return;
                        }
                        match fetched {
                            Ok(links) => draft.set(LinksDraft::loaded(&items, &links)),
                            Err(err) => {
                                log::error!("failed to fetch links for employee {}: {}", employee_id, err);
                                draft.set(LinksDraft::empty(&items));
                            }
                        }
                    });
                }
            }
        });
    }

    let save_key_lifetime = lifetime.clone();
    let on_save_key = Callback::new(move |key: String| {
        let Some(employee_id) = selected.get_untracked() else {
            return;
        };
        let url = draft.with_untracked(|d| d.value(&key));
        let repo = repository.get_value();
        let success = link_saved_message(&key);
        let work = async move {
            repo.save_employee_link(employee_id, &key, &url).await?;
            draft.update(|d| d.key_saved(&key, &url));
            Ok(())
        };
        run_locked(&save_key_lifetime, busy, work, "update link", success);
    });

    let save_all_lifetime = lifetime.clone();
    let on_save_all = Callback::new(move |_: ()| {
        let Some(employee_id) = selected.get_untracked() else {
            return;
        };
        let links = draft.with_untracked(|d| d.values().clone());
        let repo = repository.get_value();
        let work = async move {
            repo.save_employee_links(employee_id, &links).await?;
            draft.update(LinksDraft::all_saved);
            Ok(())
        };
        run_locked(&save_all_lifetime, busy, work, "save links", "Links saved successfully!".into());
    });

    let on_confirm_clear = Callback::new(move |_| {
        let Some(employee_id) = pending_clear.take() else {
            return;
        };
        let repo = repository.get_value();
        let work = async move {
            repo.clear_employee_links(employee_id).await?;
            draft.set(LinksDraft::empty(&config.get_untracked()));
            Ok(())
        };
        run_locked(&lifetime, busy, work, "delete links", "Links deleted successfully!".into());
    });

    let selected_name = move || {
        let id = selected.get()?;
        employees.with(|list| list.iter().find(|e| e.id == id).map(|e| e.name.clone()))
    };
    let clear_message =
        Signal::derive(move || delete_links_prompt(selected_name().as_deref()));
    let dirty = move || draft.with(LinksDraft::is_dirty);

    view! {
        <section class="rounded-lg bg-surface-elevated p-6 shadow-sm space-y-4">
            <div>
                <h3 class="text-lg font-semibold text-fg">"🔗 Employee Quick Links"</h3>
                <p class="text-sm text-fg-muted">
                    "You can add any type of link - Google Sheets, Excel Online, Google Docs, or other documents"
                </p>
            </div>
            <label class="block text-sm font-medium text-fg">
                "Select Employee"
                <select
                    class=FIELD_CLASS
                    on:change=move |ev| selected.set(event_target_value(&ev).parse::<u32>().ok())
                >
                    <option value="" selected=move || selected.get().is_none()>
                        "-- Choose an employee --"
                    </option>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id
                        children=move |employee| {
                            let id = employee.id;
                            view! {
                                <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                    {format!("{} (ID: {})", employee.name, id)}
                                </option>
                            }
                        }
                    />
                </select>
            </label>
            <Show when=move || selected.get().is_some()>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <For
                        each=move || config.get()
                        key=|item| item.key.clone()
                        children=move |item| view! {
                            <LinkField item=item draft=draft busy=busy on_save=on_save_key />
                        }
                    />
                </div>
                <div class="flex flex-wrap items-center gap-3">
                    <button
                        type="button"
                        class=PRIMARY_BUTTON
                        disabled=move || busy.get() || !dirty()
                        on:click=move |_| on_save_all.call(())
                    >
                        "💾 Save All Links"
                    </button>
                    <button
                        type="button"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                        disabled=move || busy.get()
                        on:click=move |_| {
                            if let Some(id) = selected.get_untracked() {
                                pending_clear.ask(id);
                            }
                        }
                    >
                        "🗑️ Delete All Links"
                    </button>
                    <Show when=move || !dirty()>
                        <span class="text-sm text-status-success-text">"✓ All changes saved"</span>
                    </Show>
                </div>
            </Show>
            <ConfirmDialog
                is_open=pending_clear.is_open()
                title="Delete links"
                message=clear_message
                confirm_label="Delete"
                on_confirm=on_confirm_clear
                on_cancel=Callback::new(move |_| pending_clear.dismiss())
                destructive=true
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_name_the_employee_or_fall_back() {
        assert_eq!(delete_links_prompt(Some("Asha")), "Delete all links for Asha?");
        assert_eq!(
            delete_links_prompt(None),
            "Delete all links for this employee?"
        );
    }

    #[test]
    fn saved_message_carries_the_link_icon() {
        assert_eq!(link_saved_message("timesheet_url"), "⏰ Link updated successfully!");
        assert_eq!(link_saved_message("custom_url"), "🔗 Link updated successfully!");
    }
}
