use crate::state::navigation::{use_navigator, Page};
use leptos::*;

pub struct Service {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub description: &'static str,
}

pub const SERVICES: [Service; 5] = [
    Service {
        title: "Diving Services",
        items: &[
            "Onshore & offshore diving",
            "Underwater inspection",
            "Below-waterline repairs",
            "ROV operations",
            "Diver training",
        ],
        description: "We provide expert commercial diving solutions for both onshore and offshore operations, backed by a team trained to work in high-risk environments. Our services include inspection, maintenance, and repair work below waterline, supported by modern ROV technology and certified training programs.",
    },
    Service {
        title: "Marine & Civil Construction",
        items: &[
            "Marine construction",
            "Civil construction",
            "Aluminium & steel shipbuilding",
            "Outfitting",
            "Retrofitting",
        ],
        description: "With experience across complex maritime and infrastructure projects, we execute end-to-end marine and civil construction, ensuring timely delivery with high engineering standards. Our shipbuilding capability covers both aluminium and steel vessels, outfit integrations, and retrofitting.",
    },
    Service {
        title: "Marine Engineering & Propulsion",
        items: &[
            "Engine installation",
            "Propulsion systems",
            "System overhauls",
            "Mechanical maintenance",
            "Electrical automation",
        ],
        description: "From propulsion to power management, we offer turnkey marine engineering services. Our expertise includes engine installations, system overhauls, mechanical maintenance, and electrical automation tailored to the maritime industry.",
    },
    Service {
        title: "Fabrication & Maintenance",
        items: &[
            "Precision machining",
            "Structural welding",
            "Pipe installation",
            "Hull & tank treatment",
        ],
        description: "We support vessel lifecycle needs with advanced fabrication capabilities. Our services include precision machining, structural welding, pipe installations, and hull/tank treatment for improved longevity and performance.",
    },
    Service {
        title: "Support Services",
        items: &["Skilled manpower", "Diving equipment rental"],
        description: "To ensure seamless project execution, we offer skilled manpower solutions and reliable diving equipment rentals. Every resource provided adheres to industry safety and operational standards.",
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"Our Services"</h1>
                <div class="mt-12 space-y-8">
                    {SERVICES
                        .iter()
                        .map(|service| view! {
                            <article class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm">
                                <h2 class="text-2xl font-semibold text-fg">{service.title}</h2>
                                <p class="mt-3 text-sm text-fg-muted leading-relaxed">{service.description}</p>
                                <ul class="mt-4 flex flex-wrap gap-2">
                                    {service
                                        .items
                                        .iter()
                                        .map(|item| view! {
                                            <li class="rounded-full bg-surface-muted px-3 py-1 text-xs text-fg">{*item}</li>
                                        })
                                        .collect_view()}
                                </ul>
                            </article>
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 text-center">
                    <button
                        type="button"
                        class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                        on:click=move |_| navigator.navigate(Page::Contact)
                    >
                        "Request a Quote"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_page;

    #[test]
    fn lists_every_service_line() {
        let html = render_page(|| view! { <ServicesPage /> });
        for service in SERVICES.iter() {
            let escaped = service.title.replace('&', "&amp;");
            assert!(html.contains(service.title) || html.contains(&escaped));
        }
        assert!(html.contains("Request a Quote"));
    }
}
