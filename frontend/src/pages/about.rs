use leptos::*;

const VALUES: [(&str, &str); 4] = [
    ("Safety", "Every dive, lift and weld is planned around people coming home safely."),
    ("Integrity", "Transparent reporting to owners, yards and classification societies."),
    ("Craft", "Certified divers, engineers and fabricators who own their work."),
    ("Reach", "Crews mobilised from Kochi, Chennai, Mangaluru, Vizag and overseas."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="bg-surface pt-16 pb-20">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <h1 class="text-4xl font-bold text-fg text-center">"About Us"</h1>
                <p class="mt-6 text-base text-fg-muted leading-relaxed">
                    "Mag Marine Services Pvt. Ltd. is a marine engineering company serving shipyards, ports, \
                     offshore operators and naval projects. We combine commercial diving, marine and civil \
                     construction, propulsion engineering and fabrication under one roof so vessel owners \
                     deal with a single accountable partner."
                </p>
                <div class="mt-12 grid grid-cols-1 sm:grid-cols-2 gap-6">
                    {VALUES
                        .iter()
                        .map(|(title, body)| view! {
                            <div class="rounded-lg border border-border bg-surface-elevated p-6">
                                <h2 class="text-lg font-semibold text-fg">{*title}</h2>
                                <p class="mt-2 text-sm text-fg-muted">{*body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
