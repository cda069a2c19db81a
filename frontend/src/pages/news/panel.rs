use super::repository::{NewsCard, NewsRepository};
use crate::api::ApiClient;
use crate::components::{layout::LoadingSpinner, messages::EmptyState};
use leptos::*;
use std::rc::Rc;

#[component]
fn NewsCardView(card: NewsCard) -> impl IntoView {
    view! {
        <article class="rounded-lg overflow-hidden border border-border bg-surface-elevated shadow-sm">
            {card.image_url.clone().map(|src| view! {
                <img src=src alt=card.title.clone() class="w-full h-56 object-cover" loading="lazy" />
            })}
            <div class="p-5">
                <p class="text-xs uppercase tracking-wide text-fg-muted">{card.date_label.clone()}</p>
                <h2 class="mt-1 text-xl font-semibold text-fg">{card.title.clone()}</h2>
                <p class="mt-2 text-sm text-fg-muted whitespace-pre-line">{card.description.clone()}</p>
            </div>
        </article>
    }
}

#[component]
pub fn NewsPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = NewsRepository::new_with_client(Rc::new(api));
    let cards = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.load_cards().await }
        },
    );

    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"News & Events"</h1>
                <p class="mt-3 text-center text-fg-muted">
                    "Project milestones, launches and happenings across Mag Marine."
                </p>
                <div class="mt-10">
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || {
                            cards
                                .get()
                                .map(|result| match result {
                                    Ok(cards) if cards.is_empty() => {
                                        view! {
                                            <EmptyState
                                                title="No news or events yet"
                                                description="Check back soon for updates."
                                            />
                                        }
                                            .into_view()
                                    }
                                    Ok(cards) => {
                                        view! {
                                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                                <For
                                                    each=move || cards.clone()
                                                    key=|card| card.id.clone()
                                                    children=move |card| view! { <NewsCardView card=card /> }
                                                />
                                            </div>
                                        }
                                            .into_view()
                                    }
                                    Err(err) => {
                                        log::warn!("failed to load news: {}", err);
                                        view! {
                                            <p class="text-center text-status-error-text">
                                                "Unable to load news right now."
                                            </p>
                                        }
                                            .into_view()
                                    }
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </div>
    }
}
