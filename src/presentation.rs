//! Report fields to visual states (tailwind classes, icons, gauge geometry).

use crate::report::{Impact, MetricStatus};

/// Radius of the overall score gauge circle.
pub const GAUGE_RADIUS: f64 = 90.0;

pub fn status_color(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Excellent => "text-emerald-400",
        MetricStatus::Good => "text-sky-400",
        MetricStatus::Average => "text-amber-400",
        MetricStatus::Poor => "text-rose-400",
        MetricStatus::Unknown => "text-gray-400",
    }
}

pub fn impact_color(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "bg-rose-500/10 text-rose-400 border-rose-500/20",
        Impact::Medium => "bg-amber-500/10 text-amber-400 border-amber-500/20",
        Impact::Low => "bg-sky-500/10 text-sky-400 border-sky-500/20",
        Impact::Unknown => "bg-gray-500/10 text-gray-400 border-gray-500/20",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Network,
    Activity,
    Smile,
    ShieldAlert,
    Cpu,
    Code,
    Brain,
    Target,
}

impl CategoryIcon {
    /// First matching keyword wins, so `deep-tech` is Cpu even though it
    /// could also read as rendering.
    pub fn for_category(category: &str) -> Self {
        let cat = category.to_lowercase();
        if cat.contains("entity") {
            CategoryIcon::Network
        } else if cat.contains("intent") {
            CategoryIcon::Activity
        } else if cat.contains("sentiment") {
            CategoryIcon::Smile
        } else if cat.contains("security") {
            CategoryIcon::ShieldAlert
        } else if cat.contains("deep") || cat.contains("tech") {
            CategoryIcon::Cpu
        } else if cat.contains("rendering") || cat.contains("js") {
            CategoryIcon::Code
        } else if cat.contains("ai") || cat.contains("sge") {
            CategoryIcon::Brain
        } else {
            CategoryIcon::Target
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Network => "\u{1F578}",     // 🕸
            CategoryIcon::Activity => "\u{1F4C8}",    // 📈
            CategoryIcon::Smile => "\u{1F642}",       // 🙂
            CategoryIcon::ShieldAlert => "\u{1F6E1}", // 🛡
            CategoryIcon::Cpu => "\u{2699}",          // ⚙
            CategoryIcon::Code => "\u{1F4BB}",        // 💻
            CategoryIcon::Brain => "\u{1F9E0}",       // 🧠
            CategoryIcon::Target => "\u{1F3AF}",      // 🎯
        }
    }
}

/// Chart bars alternate between two brand colors.
pub fn bar_fill(index: usize) -> &'static str {
    if index % 2 == 0 {
        "#0ea5e9"
    } else {
        "#10b981"
    }
}

/// `(dasharray, dashoffset)` for an SVG circle showing `score` out of 100.
pub fn gauge_dash(score: f64) -> (f64, f64) {
    let circumference = 2.0 * std::f64::consts::PI * GAUGE_RADIUS;
    let filled = score.clamp(0.0, 100.0) / 100.0;
    (circumference, circumference * (1.0 - filled))
}

/// Scores are whole numbers in practice; keep one decimal otherwise.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors() {
        assert_eq!(status_color(MetricStatus::Excellent), "text-emerald-400");
        assert_eq!(status_color(MetricStatus::Poor), "text-rose-400");
        assert_eq!(status_color(MetricStatus::Unknown), "text-gray-400");
    }

    #[test]
    fn impact_colors() {
        assert!(impact_color(Impact::High).contains("rose"));
        assert!(impact_color(Impact::Medium).contains("amber"));
        assert!(impact_color(Impact::Low).contains("sky"));
    }

    #[test]
    fn category_icons_follow_keywords() {
        assert_eq!(CategoryIcon::for_category("entity-seo"), CategoryIcon::Network);
        assert_eq!(CategoryIcon::for_category("intent-alignment"), CategoryIcon::Activity);
        assert_eq!(CategoryIcon::for_category("Sentiment"), CategoryIcon::Smile);
        assert_eq!(CategoryIcon::for_category("security"), CategoryIcon::ShieldAlert);
        assert_eq!(CategoryIcon::for_category("deep-tech"), CategoryIcon::Cpu);
        assert_eq!(CategoryIcon::for_category("technical"), CategoryIcon::Cpu);
        assert_eq!(CategoryIcon::for_category("rendering"), CategoryIcon::Code);
        assert_eq!(CategoryIcon::for_category("ai-readiness"), CategoryIcon::Brain);
        assert_eq!(CategoryIcon::for_category("local"), CategoryIcon::Target);
    }

    #[test]
    fn gauge_offsets() {
        let (full, offset) = gauge_dash(100.0);
        assert_eq!(offset, 0.0);
        let (_, empty) = gauge_dash(0.0);
        assert_eq!(empty, full);
        let (_, half) = gauge_dash(50.0);
        assert!((half - full / 2.0).abs() < 1e-9);
    }

    #[test]
    fn scores_format_without_trailing_zero() {
        assert_eq!(format_score(72.0), "72");
        assert_eq!(format_score(72.5), "72.5");
    }
}
