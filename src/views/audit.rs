use dioxus::prelude::*;

use crate::clipboard;
use crate::controller::{clear_copied_after, AnalysisStep, AuditController, CopyIndicator, COPIED_RESET_DELAY};
use crate::lifecycle::AuditBackend;
use crate::progress::{with_captions, CAPTION_INTERVAL, INITIAL_CAPTION};
use crate::report::prompt::implementation_prompt;
use crate::report::Recommendation;
use crate::views::{Dashboard, FeatureGrid, Footer, PillarBadges, RecommendationList, SourceLinks};

const DEFAULT_URL: &str = "https://google.com";

/// The single audit page: input, progress, dashboard and roadmap.
#[component]
pub fn Audit() -> Element {
    let backend = use_context::<AuditBackend>();
    let mut url = use_signal(|| DEFAULT_URL.to_string());
    let mut controller = use_signal(AuditController::new);
    let mut caption = use_signal(|| INITIAL_CAPTION);
    let mut copied = use_signal(CopyIndicator::default);

    let handle_scan = move |_| {
        let Some(ticket) = controller.write().start(&url()) else {
            return;
        };

        caption.set(INITIAL_CAPTION);
        controller.write().mark_dispatched(&ticket);
        let backend = backend.clone();
        spawn(async move {
            // Captions cycle exactly as long as the request is in flight.
            let outcome = with_captions(
                CAPTION_INTERVAL,
                move |next| caption.set(next),
                backend.0.request_audit(&ticket.url),
            )
            .await;
            controller.write().complete(&ticket, outcome);
        });
    };

    let handle_copy = move |rec: Recommendation| {
        let prompt = implementation_prompt(&rec);
        let token = copied.write().mark(&rec.id);

        spawn(async move {
            if let Err(e) = clipboard::copy_to_clipboard(&prompt).await {
                tracing::warn!(id = %rec.id, "copy to clipboard failed: {:#}", e);
            }
        });
        spawn(async move {
            clear_copied_after(COPIED_RESET_DELAY, token, move |t| copied.write().expire(t)).await;
        });
    };

    let state = controller.read();
    let busy = state.is_busy();
    let label = state.button_label();
    let error = state.error().map(str::to_string);
    let report = state.report().cloned();
    let can_reset = state.can_reset();
    let show_landing = state.step() == AnalysisStep::Idle;
    drop(state);

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-6 py-12 md:py-24",

            header {
                class: "text-center mb-16",
                div {
                    class: "inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-emerald-500/10 border border-emerald-500/20 text-emerald-400 text-xs font-black uppercase tracking-widest mb-8",
                    "Ultimate 360\u{b0} Cognitive SEO Audit"
                }
                h1 {
                    class: "text-5xl md:text-7xl font-extrabold mb-6 tracking-tight text-white",
                    "Web SEO Guard"
                }
                p {
                    class: "text-gray-400 text-lg md:text-xl max-w-2xl mx-auto leading-relaxed",
                    "Analyzes Entity Associations, Search Intent, and Deep Tech Integrity."
                }
            }

            section {
                class: "max-w-3xl mx-auto mb-20",
                div {
                    class: "relative flex flex-col md:flex-row items-stretch md:items-center glass p-2.5 rounded-3xl",
                    input {
                        class: "flex-grow bg-transparent border-none focus:ring-0 text-white px-4 py-4 text-xl placeholder:text-gray-600",
                        r#type: "text",
                        placeholder: "https://yourwebsite.com",
                        value: "{url}",
                        oninput: move |e| url.set(e.value()),
                    }
                    button {
                        class: "mt-2 md:mt-0 bg-sky-600 hover:bg-sky-500 text-white px-10 py-4 rounded-2xl font-bold flex items-center justify-center gap-3 transition-all disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: busy,
                        onclick: handle_scan,
                        "{label}"
                        if busy {
                            span { class: "animate-spin", "\u{27f3}" }
                        } else {
                            span { "\u{2192}" }
                        }
                    }
                }
                PillarBadges {}
                if let Some(message) = error {
                    div {
                        class: "audit-error mt-6 p-5 rounded-2xl bg-rose-500/10 border border-rose-500/20 text-rose-400 flex items-center justify-between gap-4",
                        span { class: "font-medium", "\u{26a0} {message}" }
                        if can_reset {
                            button {
                                class: "px-4 py-2 rounded-xl bg-white/5 hover:bg-white/10 text-white text-sm font-bold",
                                onclick: move |_| {
                                    controller.write().reset();
                                },
                                "Dismiss"
                            }
                        }
                    }
                }
            }

            if busy {
                div {
                    class: "text-center py-24",
                    h3 { class: "text-3xl font-bold mb-3 text-white tracking-tight", "{caption}" }
                    p {
                        class: "text-gray-500 text-lg italic",
                        "Decoding the complex topical graph and behavioral signals of your domain..."
                    }
                }
            }

            if let Some(report) = report {
                div {
                    class: "space-y-12",
                    Dashboard { report: report.clone() }
                    RecommendationList {
                        recommendations: report.recommendations.clone(),
                        copied_id: copied.read().copied_id().map(str::to_string),
                        on_copy: handle_copy,
                    }
                    SourceLinks { sources: report.sources().to_vec() }
                    div {
                        class: "flex justify-center py-12",
                        button {
                            class: "px-10 py-5 rounded-3xl bg-white/5 hover:bg-white/10 text-white font-bold transition-all border border-white/10",
                            onclick: move |_| {
                                controller.write().reset();
                            },
                            "\u{21bb} Run Full 360\u{b0} Scan"
                        }
                    }
                }
            }

            if show_landing {
                FeatureGrid {}
            }

            Footer {}
        }
    }
}
