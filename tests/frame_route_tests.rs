/// Integration tests for the frame HTTP routes
mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::*;
use powerloom_frame::server::create_router;
use serde_json::json;
use tower::ServiceExt;
use wiremock::MockServer;

fn router(upstream: &MockServer) -> Router {
    create_router(app_state(upstream), None)
}

fn press_button(index: i64) -> Request<Body> {
    let payload = json!({
        "untrustedData": {
            "fid": 3,
            "url": "https://frame.example/api",
            "buttonIndex": index,
            "timestamp": 1706243218
        },
        "trustedData": { "messageBytes": "0a49" }
    });

    Request::builder()
        .method("POST")
        .uri("/api")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_initial_frame() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 200, json!({ "epochId": 42 }), 0).await;

    let response = router(&upstream)
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<meta property="fc:frame" content="vNext">"#));
    assert!(html.contains("image?text=Welcome%21+to+Powerloom"));
}

#[tokio::test]
async fn test_epoch_button_renders_epoch() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 200, json!({ "epochId": 42 }), 1).await;

    let response = router(&upstream).oneshot(press_button(1)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("image?text=Current+Epoch+ID%3A+42"));
}

#[tokio::test]
async fn test_top_pairs_button_renders_fallback_on_upstream_error() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 503, json!({}), 1).await;

    let response = router(&upstream).oneshot(press_button(2)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Failed+to+fetch+top+3+pairs"));
}

#[tokio::test]
async fn test_stats_button_renders_stats() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 200, json!({ "epochId": 9 }), 1).await;
    mount_json(
        &upstream,
        stats_path(9),
        200,
        json!({ "fee24h": 10, "tvl": 20, "volume24h": 30 }),
        1,
    )
    .await;

    let response = router(&upstream).oneshot(press_button(3)).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains("24h+Fee%3A+10%2C+24h+TVL%3A+20%2C+24h+Volume%3A+30"));
}

#[tokio::test]
async fn test_unknown_selector_shows_welcome_without_upstream_call() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 200, json!({ "epochId": 42 }), 0).await;

    let response = router(&upstream)
        .oneshot(
            Request::builder()
                .uri("/api?action=moonprice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Welcome%21+to+Powerloom"));
}

#[tokio::test]
async fn test_selector_query_dispatches() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 200, json!({ "epochId": 5 }), 1).await;

    let response = router(&upstream)
        .oneshot(
            Request::builder()
                .uri("/api?action=epochid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Current+Epoch+ID%3A+5"));
}

#[tokio::test]
async fn test_malformed_action_body_is_rejected() {
    let upstream = MockServer::start().await;

    let response = router(&upstream)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"buttonIndex": 1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"]["type"], "bad_request");
}

#[tokio::test]
async fn test_out_of_range_button_index_shows_welcome() {
    let upstream = MockServer::start().await;
    mount_json(&upstream, epoch_path(), 200, json!({ "epochId": 42 }), 0).await;

    for index in [256, -1, 5] {
        let response = router(&upstream).oneshot(press_button(index)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "buttonIndex {}", index);
        let html = body_text(response).await;
        assert!(html.contains("Welcome%21+to+Powerloom"), "buttonIndex {}", index);
    }
}

#[tokio::test]
async fn test_image_route_renders_escaped_svg() {
    let upstream = MockServer::start().await;

    let response = router(&upstream)
        .oneshot(
            Request::builder()
                .uri("/api/image?text=Top+3+Pairs%3A+%3Cscript%3E")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );
    let svg = body_text(response).await;
    assert!(svg.contains("Top 3 Pairs: &lt;script&gt;"));
    assert!(!svg.contains("<script>"));
}

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;

    let response = router(&upstream)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_metrics_route_only_when_enabled() {
    let upstream = MockServer::start().await;

    let response = router(&upstream)
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let app = create_router(app_state(&upstream), Some(std::sync::Arc::new(recorder.handle())));
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
