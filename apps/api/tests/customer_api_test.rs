//! 顧客 API 統合テスト
//!
//! not-found の伝播と削除エンベロープを検証する。

mod helpers;

use axum::http::{Method, StatusCode};
use helpers::{request, test_app};
use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_domain::Customer;

fn stored_customer(id: &str) -> Customer {
    Customer {
        id:          id.to_string(),
        name:        "山田太郎".to_string(),
        email:       "taro@example.com".to_string(),
        phone:       "090-1234-5678".to_string(),
        address:     "東京都千代田区 1-2-3".to_string(),
        loyalty_pts: 10,
    }
}

#[tokio::test]
async fn test_未登録idの取得は404_not_foundになる() {
    let (app, _repositories) = test_app();

    let (status, body) = request(app, Method::GET, "/api/customers/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["status"], "Not Found");
    assert!(body["data"].as_str().unwrap().contains("Customer"));
}

#[tokio::test]
async fn test_作成は201で採番済みidを返す() {
    let (app, _repositories) = test_app();

    let (status, body) = request(
        app,
        Method::POST,
        "/api/customers/",
        Some(json!({
            "name": "山田太郎",
            "email": "taro@example.com",
            "phone": "090-1234-5678",
            "address": "東京都千代田区 1-2-3",
            "loyalty_points": 10
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Created");
    assert!(!body["data"]["customer_id"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["loyalty_points"], 10);
}

#[tokio::test]
async fn test_削除成功はdeleted_successfullyでdataを含まない() {
    let (app, repositories) = test_app();
    repositories.customers.add(stored_customer("1"));

    let (status, body) = request(app, Method::DELETE, "/api/customers/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["status"], "Deleted Successfully");
    assert!(body.get("data").is_none());
    assert_eq!(repositories.customers.delete_calls(), 1);
}

#[tokio::test]
async fn test_未登録idの削除は404でdeleteは呼ばれない() {
    let (app, repositories) = test_app();

    let (status, body) = request(app, Method::DELETE, "/api/customers/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Not Found");
    assert_eq!(repositories.customers.delete_calls(), 0);
}

#[tokio::test]
async fn test_メールアドレスが不正な作成は400になる() {
    let (app, repositories) = test_app();

    let (status, _body) = request(
        app,
        Method::POST,
        "/api/customers/",
        Some(json!({
            "name": "山田太郎",
            "email": "不正なアドレス",
            "phone": "090-1234-5678"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(repositories.customers.save_calls(), 0);
}
