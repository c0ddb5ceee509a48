use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use connectify_config::AppConfig;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_is_nested_under_api() {
    let app = connectify_backend::app(Arc::new(AppConfig::default()));

    let (status, body) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[cfg(feature = "webhooks")]
#[tokio::test]
async fn test_webhooks_follow_runtime_flag() {
    let enabled = Arc::new(AppConfig {
        use_webhooks: true,
        ..AppConfig::default()
    });
    let (status, body) = get(connectify_backend::app(enabled), "/api/organizations/1/webhooks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));

    let disabled = Arc::new(AppConfig::default());
    let (status, _) = get(connectify_backend::app(disabled), "/api/organizations/1/webhooks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[cfg(feature = "app_store")]
#[tokio::test]
async fn test_app_store_needs_flag_and_section() {
    let flag_only = Arc::new(AppConfig {
        use_app_store: true,
        ..AppConfig::default()
    });
    let (status, _) = get(connectify_backend::app(flag_only), "/api/apps/zapier/setup").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let configured = Arc::new(AppConfig {
        use_app_store: true,
        app_store: Some(connectify_config::AppStoreConfig::default()),
        ..AppConfig::default()
    });
    let (status, body) = get(connectify_backend::app(configured), "/api/apps/zapier/setup").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inviteLink"], "");
}
