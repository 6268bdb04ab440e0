use dioxus::prelude::*;

use crate::presentation::{bar_fill, format_score, gauge_dash, status_color, GAUGE_RADIUS};
use crate::report::{AuditReport, SeoMetric, SourceReference};

/// Header, score gauge, pillar chart and metric tiles for a finished audit.
#[component]
pub fn Dashboard(report: AuditReport) -> Element {
    let scanned_on = chrono::Local::now().format("%Y-%m-%d").to_string();

    rsx! {
        div {
            class: "flex flex-col md:flex-row md:items-center justify-between gap-4 glass p-6 rounded-[2rem]",
            div {
                h2 { class: "text-2xl font-bold text-white mb-1", "Ultimate Audit: {report.project_name}" }
                p { class: "text-gray-400 text-sm", "Cognitive & Deep Technical Scan completed on {scanned_on}" }
            }
            div {
                class: "px-4 py-2 bg-emerald-500/10 text-emerald-400 rounded-xl text-xs font-black uppercase tracking-widest border border-emerald-500/20",
                "Master Class Report"
            }
        }

        div {
            class: "grid grid-cols-1 lg:grid-cols-12 gap-8",
            div {
                class: "lg:col-span-4 glass p-10 rounded-[2.5rem] flex flex-col items-center justify-center text-center",
                h4 { class: "text-gray-500 font-bold mb-8 uppercase tracking-[0.2em] text-[10px]", "Composite Domain Authority" }
                ScoreGauge { score: report.overall_score }
                p { class: "mt-10 text-gray-300 text-lg font-medium leading-relaxed italic max-w-xs", "\"{report.summary}\"" }
            }
            div {
                class: "lg:col-span-8 glass p-10 rounded-[2.5rem]",
                h4 { class: "text-gray-100 font-bold text-xl mb-10", "Cognitive Pillars" }
                PillarChart { metrics: report.metrics.clone() }
                MetricTiles { metrics: report.metrics.clone() }
            }
        }
    }
}

#[component]
pub fn ScoreGauge(score: f64) -> Element {
    let (dasharray, dashoffset) = gauge_dash(score);
    let label = format_score(score);

    rsx! {
        div {
            class: "relative",
            svg {
                class: "w-56 h-56 transform -rotate-90",
                circle {
                    class: "text-white/5",
                    stroke_width: "12",
                    stroke: "currentColor",
                    fill: "transparent",
                    r: "{GAUGE_RADIUS}",
                    cx: "112",
                    cy: "112",
                }
                circle {
                    class: "text-sky-500 transition-all duration-1000 ease-out",
                    stroke_width: "12",
                    stroke_dasharray: "{dasharray}",
                    stroke_dashoffset: "{dashoffset}",
                    stroke_linecap: "round",
                    stroke: "currentColor",
                    fill: "transparent",
                    r: "{GAUGE_RADIUS}",
                    cx: "112",
                    cy: "112",
                }
            }
            div {
                class: "absolute inset-0 flex flex-col items-center justify-center",
                span { class: "overall-score text-7xl font-black text-white", "{label}" }
                span { class: "text-gray-500 font-bold uppercase text-[10px] tracking-widest mt-1", "out of 100" }
            }
        }
    }
}

/// Vertical bars in display order, 0-100 scale.
#[component]
pub fn PillarChart(metrics: Vec<SeoMetric>) -> Element {
    let bars: Vec<(String, String, String)> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let tooltip = format!("{}: {}", m.category, format_score(m.score));
            let style = format!(
                "height: {}%; background-color: {};",
                m.score.clamp(0.0, 100.0),
                bar_fill(i)
            );
            (m.category.clone(), tooltip, style)
        })
        .collect();

    rsx! {
        div {
            class: "h-[300px] flex items-end gap-4",
            for (i, (category, tooltip, style)) in bars.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "flex-1 h-full flex flex-col items-center justify-end gap-2",
                    title: "{tooltip}",
                    div { class: "w-9 rounded-[10px]", style: "{style}" }
                    span { class: "text-[10px] font-black text-gray-500 truncate max-w-full", "{category}" }
                }
            }
        }
    }
}

#[component]
pub fn MetricTiles(metrics: Vec<SeoMetric>) -> Element {
    let tiles: Vec<(String, String, &'static str)> = metrics
        .iter()
        .map(|m| (m.category.clone(), format_score(m.score), status_color(m.status)))
        .collect();

    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-4 gap-4 mt-12",
            for (i, (category, score, color)) in tiles.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "metric-tile p-4 rounded-2xl bg-white/5 border border-white/5",
                    div { class: "text-2xl font-black mb-1 {color}", "{score}%" }
                    div { class: "text-[9px] text-gray-500 uppercase font-black tracking-[0.15em] truncate", "{category}" }
                }
            }
        }
    }
}

/// "Authority Reference Points": grounding citations, hidden when empty.
#[component]
pub fn SourceLinks(sources: Vec<SourceReference>) -> Element {
    if sources.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pt-12 border-t border-white/5",
            h4 { class: "text-[10px] font-black uppercase tracking-[0.3em] text-gray-500 mb-6", "Authority Reference Points" }
            div {
                class: "flex flex-wrap gap-4",
                for (i, source) in sources.iter().enumerate() {
                    a {
                        key: "{i}",
                        class: "source-link px-5 py-3 rounded-2xl bg-white/5 hover:bg-white/10 text-sm text-gray-400 hover:text-white transition-all border border-white/5",
                        href: "{source.uri}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "\u{2197} {source.title}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MetricStatus;

    #[test]
    fn source_links_render_nothing_when_empty() {
        let html = dioxus_ssr::render_element(rsx! { SourceLinks { sources: Vec::new() } });
        assert!(!html.contains("Authority Reference Points"));
    }

    #[test]
    fn source_links_render_each_citation() {
        let sources = vec![
            SourceReference { title: "Example".into(), uri: "https://example.com/".into() },
            SourceReference { title: "Search Reference".into(), uri: String::new() },
        ];
        let html = dioxus_ssr::render_element(rsx! { SourceLinks { sources } });
        assert_eq!(html.matches("source-link").count(), 2);
        assert!(html.contains("https://example.com/"));
    }

    #[test]
    fn tiles_are_colored_by_status() {
        let metrics = vec![
            SeoMetric { category: "Entity SEO".into(), score: 60.0, status: MetricStatus::Average },
            SeoMetric { category: "Security".into(), score: 95.0, status: MetricStatus::Excellent },
        ];
        let html = dioxus_ssr::render_element(rsx! { MetricTiles { metrics } });
        assert_eq!(html.matches("metric-tile").count(), 2);
        assert!(html.contains("text-amber-400"));
        assert!(html.contains("text-emerald-400"));
        assert!(html.contains("95%"));
    }

    #[test]
    fn gauge_shows_score_label() {
        let html = dioxus_ssr::render_element(rsx! { ScoreGauge { score: 72.0 } });
        assert!(html.contains(">72<"));
    }
}
