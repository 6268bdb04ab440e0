pub mod client;
pub mod model;
pub mod prompt;
pub mod schema;

pub use client::{AuditService, ReportClient};
pub use model::{AuditReport, Impact, MetricStatus, Recommendation, SeoMetric, SourceReference};
