use dioxus::prelude::*;

use crate::presentation::{impact_color, CategoryIcon};
use crate::report::Recommendation;

/// Growth roadmap: one card per recommendation, in report order.
#[component]
pub fn RecommendationList(
    recommendations: Vec<Recommendation>,
    copied_id: Option<String>,
    on_copy: EventHandler<Recommendation>,
) -> Element {
    rsx! {
        section {
            class: "space-y-8",
            div {
                class: "flex flex-col md:flex-row md:items-end justify-between gap-4",
                h3 {
                    class: "text-3xl font-extrabold flex items-center gap-4 text-white tracking-tight",
                    "Growth Roadmap"
                }
                p {
                    class: "text-gray-500 text-sm font-medium italic",
                    "Advanced issues come with Implementation Prompts for precise execution."
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                for rec in recommendations.iter() {
                    RecommendationCard {
                        key: "{rec.id}",
                        rec: rec.clone(),
                        copied: copied_id.as_deref() == Some(rec.id.as_str()),
                        on_copy,
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecommendationCard(rec: Recommendation, copied: bool, on_copy: EventHandler<Recommendation>) -> Element {
    let impact_class = impact_color(rec.impact);
    let icon = CategoryIcon::for_category(&rec.category).glyph();
    let impact = rec.impact.as_str();
    let to_copy = rec.clone();

    rsx! {
        div {
            class: "recommendation-card group glass p-8 rounded-[2rem] hover:bg-white/10 transition-all duration-500",
            "data-impact": "{impact}",
            div {
                class: "flex gap-2 mb-6",
                span {
                    class: "px-4 py-1.5 rounded-xl text-[10px] font-black border {impact_class} uppercase tracking-widest",
                    "{impact} Impact"
                }
                span {
                    class: "px-3 py-1.5 rounded-xl text-[10px] font-black bg-white/5 border border-white/10 text-gray-400 uppercase tracking-widest flex items-center gap-1.5",
                    "{icon} {rec.category}"
                }
            }
            h5 { class: "text-2xl font-bold mb-3 text-white tracking-tight", "{rec.title}" }
            p { class: "text-gray-400 text-base leading-relaxed mb-8", "{rec.description}" }

            div {
                class: "space-y-3",
                div {
                    class: "p-6 bg-sky-500/5 rounded-2xl border border-sky-500/10",
                    div { class: "text-[10px] text-sky-400 font-black uppercase tracking-[0.2em] mb-3", "Strategy" }
                    p { class: "text-sky-100 font-medium leading-relaxed", "{rec.actionable_step}" }
                }
                button {
                    class: "w-full flex items-center justify-between gap-3 px-6 py-4 rounded-2xl bg-sky-600/10 hover:bg-sky-600 text-white transition-all border border-sky-600/20",
                    onclick: move |_| on_copy.call(to_copy.clone()),
                    span { class: "text-sm font-bold tracking-tight", "AI Implementation Prompt" }
                    if copied {
                        span { class: "copied-mark text-emerald-400", "\u{2714} Copied" }
                    } else {
                        span { class: "opacity-50", "Copy" }
                    }
                }
            }
        }
    }
}
