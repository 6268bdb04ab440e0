use dioxus::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

use seoguard::config::Config;
use seoguard::controller::{AnalysisStep, AuditController};
use seoguard::report::{Recommendation, ReportClient};
use seoguard::views::RecommendationList;

fn model_reply() -> String {
    let report = json!({
        "projectName": "example.com",
        "overallScore": 72,
        "summary": "x",
        "metrics": [{"category": "Entity SEO", "score": 60, "status": "average"}],
        "recommendations": [{
            "id": "r1",
            "title": "Add JSON-LD",
            "impact": "high",
            "category": "entity-seo",
            "description": "d",
            "actionableStep": "s"
        }]
    });
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": report.to_string()}]},
            "groundingMetadata": {
                "groundingChunks": [{"web": {"uri": "https://example.com/about", "title": "About"}}]
            }
        }]
    })
    .to_string()
}

#[component]
fn Roadmap(recommendations: Vec<Recommendation>) -> Element {
    rsx! { RecommendationList { recommendations, copied_id: None, on_copy: move |_| {} } }
}

#[tokio::test]
async fn full_scan_completes_and_renders_the_roadmap() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Regex(r"^/v1beta/models/.+:generateContent$".to_string()))
        .match_header("x-goog-api-key", "k")
        .match_body(Matcher::Regex("https://example.com".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(model_reply())
        .create_async()
        .await;

    let client = ReportClient::new(Config::default().with_api_key("k").with_base_url(server.url())).unwrap();
    let mut controller = AuditController::new();

    assert!(controller.run(&client, "https://example.com").await);
    mock.assert_async().await;

    assert_eq!(controller.step(), AnalysisStep::Completed);
    assert!(controller.error().is_none());
    let report = controller.report().cloned().unwrap();
    assert_eq!(report.overall_score, 72.0);
    assert_eq!(report.sources().len(), 1);

    let mut dom = VirtualDom::new_with_props(
        Roadmap,
        RoadmapProps { recommendations: report.recommendations },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("recommendation-card").count(), 1);
    assert!(html.contains("data-impact=\"high\""));
    assert!(html.contains("high Impact"));
}

#[tokio::test]
async fn rate_limited_scan_ends_in_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", Matcher::Any)
        .with_status(429)
        .with_body(r#"{"error":{"code":429,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let client = ReportClient::new(Config::default().with_api_key("k").with_base_url(server.url())).unwrap();
    let mut controller = AuditController::new();
    controller.run(&client, "https://example.com").await;

    assert_eq!(controller.step(), AnalysisStep::Error);
    assert!(controller.report().is_none());
    assert_eq!(
        controller.error(),
        Some("Rate limit exceeded. Please wait a moment before trying again.")
    );
    assert!(!controller.is_busy());
    assert!(controller.can_reset());
}
