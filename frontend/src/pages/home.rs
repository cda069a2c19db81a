use crate::pages::contact::OFFICES;
use crate::state::navigation::{use_navigator, Page};
use leptos::*;

const MILESTONES: [(&str, &str); 4] = [
    ("15+", "Years of experience"),
    ("500+", "Projects delivered"),
    ("5", "Offices across India and overseas"),
    ("24/7", "Diving and support crews on call"),
];

const STRENGTHS: [(&str, &str); 3] = [
    (
        "Expert Team",
        "Highly skilled professionals with years of maritime industry experience",
    ),
    (
        "Quality Standards",
        "All work adheres to international maritime safety and quality standards",
    ),
    (
        "On-Time Delivery",
        "Committed to meeting project deadlines without compromising quality",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let navigator = use_navigator();
    let to_services = {
        let navigator = navigator.clone();
        move |_| navigator.navigate(Page::Services)
    };
    let to_contact = move |_| navigator.navigate(Page::Contact);

    view! {
        <div class="snap-y snap-mandatory h-[calc(100vh-64px)] overflow-y-scroll scroll-smooth bg-surface">
            <section class="snap-start min-h-screen flex items-center justify-center px-4">
                <div class="text-center max-w-3xl">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl tracking-tight">
                        "MAG MARINE SERVICES"
                    </h1>
                    <p class="mt-4 text-base text-fg-muted sm:text-lg lg:text-xl">
                        "Your trusted partner in marine engineering, diving services, and maritime solutions."
                    </p>
                    <div class="mt-8 flex flex-col sm:flex-row gap-3 justify-center">
                        <button
                            type="button"
                            class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                            on:click=to_services
                        >
                            "Our Services"
                        </button>
                        <button
                            type="button"
                            class="px-8 py-3 rounded-md text-base font-medium border border-border text-fg hover:bg-action-ghost-bg-hover"
                            on:click=to_contact
                        >
                            "Contact Us"
                        </button>
                    </div>
                </div>
            </section>
            <section class="snap-start min-h-screen flex items-center px-4 bg-surface-muted">
                <div class="max-w-6xl mx-auto grid grid-cols-2 lg:grid-cols-4 gap-6 w-full">
                    {MILESTONES
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="rounded-lg bg-surface-elevated p-6 text-center shadow-sm">
                                <p class="text-3xl font-bold text-fg">{*value}</p>
                                <p class="mt-2 text-sm text-fg-muted">{*label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="snap-start min-h-screen flex items-center px-4">
                <div class="max-w-6xl mx-auto w-full">
                    <h2 class="text-3xl font-bold text-fg text-center mb-10">"Why Choose Us"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {STRENGTHS
                            .iter()
                            .map(|(title, body)| view! {
                                <div class="rounded-lg border border-border bg-surface-elevated p-6">
                                    <h3 class="text-lg font-semibold text-fg">{*title}</h3>
                                    <p class="mt-2 text-sm text-fg-muted">{*body}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
            <section class="snap-start min-h-screen flex items-center px-4 bg-surface-muted">
                <div class="max-w-6xl mx-auto w-full">
                    <h2 class="text-3xl font-bold text-fg text-center mb-10">"Our Locations"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {OFFICES
                            .iter()
                            .map(|office| view! {
                                <div class="rounded-lg bg-surface-elevated p-5 shadow-sm">
                                    <h3 class="font-semibold text-fg">{office.name}</h3>
                                    <p class="mt-1 text-sm text-fg-muted">{office.address}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page;

    #[test]
    fn home_renders_hero_and_sections() {
        let html = render_page(|| view! { <HomePage /> });
        assert!(html.contains("MAG MARINE SERVICES"));
        assert!(html.contains("Why Choose Us"));
        assert!(html.contains("KOCHI OFFICE"));
    }
}
