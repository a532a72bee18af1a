use httpmock::prelude::*;
use poker_helper::{
    AnalysisOptions, AnalysisView, Card, ConfigProvider, HttpAnalysisService, RequestCoordinator,
};
use std::sync::Arc;
use std::time::Duration;

struct TestConfig {
    endpoint: String,
}

impl ConfigProvider for TestConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(5)
    }

    fn quiet_period(&self) -> Duration {
        Duration::from_millis(50)
    }
}

fn coordinator_for(endpoint: String) -> RequestCoordinator<HttpAnalysisService> {
    let service = HttpAnalysisService::new(&TestConfig { endpoint }).unwrap();
    RequestCoordinator::new(Arc::new(service))
}

fn cards(notations: &[&str]) -> Vec<Card> {
    notations.iter().map(|n| n.parse().unwrap()).collect()
}

fn analysis_body(tag: &str) -> serde_json::Value {
    serde_json::json!({
        "playerProbabilities": {
            "pair": 40.0, "threeOfAKind": 4.0, "straight": 1.0, "flush": 1.0,
            "fullHouse": 0.5, "fourOfAKind": 0.1, "straightFlush": 0.0, "royalFlush": 0.0
        },
        "opponentProbabilities": {
            "pair": 30.0, "threeOfAKind": 3.0, "straight": 1.0, "flush": 1.0,
            "fullHouse": 0.4, "fourOfAKind": 0.1, "straightFlush": 0.0, "royalFlush": 0.0
        },
        "decision": { "action": "call", "betAmount": 10.0, "description": tag }
    })
}

fn result_tag(view: &AnalysisView) -> Option<String> {
    view.result.as_ref().map(|r| r.decision.description.clone())
}

async fn wait_for(
    coordinator: &RequestCoordinator<HttpAnalysisService>,
    mut condition: impl FnMut(&AnalysisView) -> bool,
    what: &str,
) -> AnalysisView {
    for _ in 0..400 {
        let view = coordinator.view();
        if condition(&view) {
            return view;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("timed out waiting for {}", what);
}

#[tokio::test]
async fn test_delayed_stale_response_is_never_surfaced() {
    let server = MockServer::start();

    // First request (Ah Ks): the King makes it matchable; held back long
    // enough that the second request resolves first.
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/poker/calculate")
            .body_contains(r#""rank":13"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .delay(Duration::from_millis(500))
            .json_body(analysis_body("first"));
    });
    // Second request (Qd Jc) answers immediately.
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/poker/calculate")
            .body_contains(r#""rank":12"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(analysis_body("second"));
    });

    let coordinator = coordinator_for(server.url("/api/poker"));

    coordinator.submit(&cards(&["Ah", "Ks"]), &[], AnalysisOptions::default());
    tokio::time::sleep(Duration::from_millis(50)).await;
    coordinator.submit(&cards(&["Qd", "Jc"]), &[], AnalysisOptions::default());

    let view = wait_for(&coordinator, |v| v.result.is_some(), "second result").await;
    assert_eq!(result_tag(&view).as_deref(), Some("second"));
    assert!(!view.loading);

    // Well past the first response's delay: it must not have replaced the
    // newer result.
    tokio::time::sleep(Duration::from_millis(600)).await;
    let view = coordinator.view();
    assert_eq!(result_tag(&view).as_deref(), Some("second"));
    assert!(!view.loading);
    assert_eq!(view.error, None);
}

#[tokio::test]
async fn test_unreachable_service_surfaces_error() {
    let coordinator = coordinator_for("http://127.0.0.1:9/api/poker".to_string());

    coordinator.submit(&cards(&["Ah", "Ks"]), &[], AnalysisOptions::default());

    let view = wait_for(&coordinator, |v| v.error.is_some(), "transport error").await;
    assert_eq!(view.result, None);
    assert!(!view.loading);
}

#[tokio::test]
async fn test_service_error_status_surfaces_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/poker/calculate");
        then.status(503).body("overloaded");
    });

    let coordinator = coordinator_for(server.url("/api/poker"));
    coordinator.submit(&cards(&["Ah", "Ks"]), &[], AnalysisOptions::default());

    let view = wait_for(&coordinator, |v| v.error.is_some(), "status error").await;
    let error = view.error.unwrap();
    assert!(error.contains("503"), "unexpected error: {}", error);
    assert!(error.contains("overloaded"), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_empty_hand_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/poker/calculate");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(analysis_body("unused"));
    });

    let coordinator = coordinator_for(server.url("/api/poker"));
    coordinator.submit(&cards(&["Ah"]), &[], AnalysisOptions::default());

    tokio::time::sleep(Duration::from_millis(100)).await;
    mock.assert_hits(0);
    assert_eq!(coordinator.view(), AnalysisView::default());
}
