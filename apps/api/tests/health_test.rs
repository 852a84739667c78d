//! ヘルスチェックエンドポイントのテスト

mod helpers;

use axum::http::{Method, StatusCode};
use helpers::{request, test_app};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_ヘルスチェックは200でstatusとversionを返す() {
    let (app, _repositories) = test_app();

    let (status, body) = request(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(!body["version"].as_str().unwrap().is_empty());
}
