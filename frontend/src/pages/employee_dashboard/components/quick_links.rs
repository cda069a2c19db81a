use super::SECTION_CLASS;
use crate::{components::layout::LoadingSpinner, state::links::QuickLink, utils::notify};
use leptos::*;

#[component]
pub fn QuickLinkButton(link: QuickLink) -> impl IntoView {
    let url = link.url.clone();
    view! {
        <button
            type="button"
            class="flex flex-col items-center gap-2 rounded-lg border border-border bg-surface p-4 hover:border-action-primary-border hover:shadow-md"
            on:click=move |_| notify::open_external(&url)
        >
            <span class="text-3xl">{link.icon}</span>
            <span class="text-sm font-semibold text-fg">{link.name}</span>
        </button>
    }
}

#[component]
pub fn QuickLinksSection(links: Resource<(), Vec<QuickLink>>) -> impl IntoView {
    view! {
        <section class=SECTION_CLASS>
            <h2 class="text-xl font-bold text-fg">"Quick Links"</h2>
            {move || match links.get() {
                None => view! {
                    <div class="text-center text-sm text-fg-muted">
                        <LoadingSpinner />
                        <p>"Loading links..."</p>
                    </div>
                }
                    .into_view(),
                Some(list) if list.is_empty() => view! {
                    <p class="rounded-lg border border-dashed border-border-strong p-6 text-center text-sm text-fg-muted">
                        "No quick links have been configured yet. Please contact your admin."
                    </p>
                }
                    .into_view(),
                Some(list) => view! {
                    <div class="grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-5">
                        {list
                            .into_iter()
                            .map(|link| view! { <QuickLinkButton link=link /> })
                            .collect_view()}
                    </div>
                }
                    .into_view(),
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page;

    #[test]
    fn button_shows_icon_and_name() {
        let html = render_page(|| {
            let link = QuickLink {
                key: "timesheet_url".into(),
                name: "Timesheet".into(),
                url: "https://sheets.example.com/t".into(),
                icon: "⏰",
            };
            view! { <QuickLinkButton link=link /> }
        });
        assert!(html.contains("⏰"));
        assert!(html.contains("Timesheet"));
    }

    #[test]
    fn section_waits_for_links() {
        let html = render_page(|| {
            let links = create_local_resource(|| (), |_| async { Vec::<QuickLink>::new() });
            view! { <QuickLinksSection links=links /> }
        });
        assert!(html.contains("Quick Links"));
        assert!(html.contains("Loading links..."));
    }
}
