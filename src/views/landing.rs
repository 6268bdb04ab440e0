use dioxus::prelude::*;

use crate::presentation::CategoryIcon;

const FEATURES: [(CategoryIcon, &str, &str); 4] = [
    (
        CategoryIcon::Network,
        "Entity SEO",
        "Map your domain's identity within the Knowledge Graph. Moving from keywords to relational entities.",
    ),
    (
        CategoryIcon::Activity,
        "Intent Alignment",
        "Ensure your page type and content structure match the specific psychology of the searcher's query.",
    ),
    (
        CategoryIcon::Smile,
        "Sentiment Analysis",
        "Evaluate if the NLP sentiment and tone of your writing align with niche trust expectations.",
    ),
    (
        CategoryIcon::Cpu,
        "Deep Tech Integrity",
        "Analyze JavaScript hydration, crawl budget waste, and security headers for total search bot trust.",
    ),
];

/// Shown only while idle with no report.
#[component]
pub fn FeatureGrid() -> Element {
    let cards = FEATURES.map(|(icon, title, desc)| (icon.glyph(), title, desc));

    rsx! {
        section {
            class: "mt-32 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
            for (glyph, title, desc) in cards {
                div {
                    key: "{title}",
                    class: "group glass p-8 rounded-[2rem] hover:bg-white/10 transition-all duration-300",
                    div { class: "bg-sky-500/10 text-sky-400 p-4 rounded-2xl w-fit mb-6 text-2xl", "{glyph}" }
                    h3 { class: "text-xl font-bold mb-3 text-white tracking-tight", "{title}" }
                    p { class: "text-gray-500 text-sm leading-relaxed", "{desc}" }
                }
            }
        }
    }
}

#[component]
pub fn PillarBadges() -> Element {
    rsx! {
        div {
            class: "mt-4 flex flex-wrap justify-center gap-4 text-gray-500 text-[10px] font-black uppercase tracking-widest",
            span { "Entity SEO" }
            span { "Search Intent" }
            span { "Sentiment" }
            span { "Deep Tech" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().format("%Y").to_string();

    rsx! {
        footer {
            class: "mt-32 pt-12 border-t border-white/5 text-center text-gray-600",
            div {
                class: "flex flex-wrap justify-center gap-8 mb-10 text-[10px] font-black uppercase tracking-[0.2em]",
                span { class: "text-sky-400", "Entity Analysis" }
                span { "Intent Alignment" }
                span { "Cognitive NLP" }
                span { "Deep-Tech Suite" }
            }
            p { class: "text-sm font-medium opacity-50", "\u{a9} {year} Web SEO Guard." }
        }
    }
}
