// tests/metrics_endpoint.rs
// Own test binary: installs the global Prometheus recorder exactly once.

use axum::body::{self, Body};
use http::{Request, StatusCode};
use tower::ServiceExt;

use afinn_scorer::api::{self, AppState};
use afinn_scorer::metrics::Metrics;
use afinn_scorer::{AppConfig, LexiconRegistry, ScorerOptions};

#[tokio::test]
async fn metrics_endpoint_contains_expected_series() {
    let metrics = Metrics::init().expect("install recorder");
    let state = AppState::from_config(AppConfig {
        scorer: ScorerOptions::default(),
        lexicons: LexiconRegistry::default_seed(concat!(env!("CARGO_MANIFEST_DIR"), "/data")),
    })
    .unwrap();
    let app = api::router(state).merge(metrics.router());

    let req = Request::post("/score")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text":"It is so bad"}"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    for needle in ["afinn_score_requests_total", "afinn_matches_per_text"] {
        assert!(text.contains(needle), "missing {needle} in:\n{text}");
    }
    assert!(text.contains("strategy=\"pattern\""), "{text}");

    // A second recorder cannot be installed in the same process.
    assert!(Metrics::init().is_err());
}
