use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use connectify_app_store::routes;
use connectify_config::{AppConfig, AppStoreConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

fn config_with_zapier(keys: Value) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        use_app_store: true,
        app_store: Some(AppStoreConfig {
            apps: HashMap::from([("zapier".to_string(), keys)]),
        }),
        ..AppConfig::default()
    })
}

async fn get_setup(config: Arc<AppConfig>) -> (StatusCode, Value) {
    let response = routes(config)
        .oneshot(
            Request::builder()
                .uri("/apps/zapier/setup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_zapier_setup_returns_invite_link() {
    let (status, body) = get_setup(config_with_zapier(json!({
        "invite_link": "https://zapier.com/developer/public-invite/123/abc/"
    })))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "inviteLink": "https://zapier.com/developer/public-invite/123/abc/" })
    );
}

#[tokio::test]
async fn test_zapier_setup_without_keys_returns_empty_link() {
    let (status, body) = get_setup(Arc::new(AppConfig::default())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "inviteLink": "" }));
}

#[tokio::test]
async fn test_zapier_setup_with_malformed_keys_is_server_error() {
    let (status, body) = get_setup(config_with_zapier(json!(["not", "an", "object"]))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], 500);
}
