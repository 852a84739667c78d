//! 従業員 API 統合テスト
//!
//! 更新（全置換）の挙動とパスパラメータの ID 注入を検証する。

mod helpers;

use axum::http::{Method, StatusCode};
use helpers::{request, test_app};
use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_domain::Employee;

fn stored_employee(id: &str) -> Employee {
    Employee {
        id:         id.to_string(),
        name:       "田中一郎".to_string(),
        role:       "Cashier".to_string(),
        email:      "ichiro@example.com".to_string(),
        phone:      "03-1234-5678".to_string(),
        date_hired: "2023-04-01".to_string(),
    }
}

#[tokio::test]
async fn test_更新成功は200で全フィールドを上書きしたレスポンスを返す() {
    let (app, repositories) = test_app();
    repositories.employees.add(stored_employee("1"));

    let (status, body) = request(
        app.clone(),
        Method::PUT,
        "/api/employees/1",
        Some(json!({
            "name": "田中次郎",
            "role": "Manager",
            "email": "jiro@example.com",
            "phone": "03-9999-0000",
            "date_hired": "2024-10-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["status"], "OK");
    assert_eq!(
        body["data"],
        json!({
            "employee_id": "1",
            "name": "田中次郎",
            "role": "Manager",
            "email": "jiro@example.com",
            "phone": "03-9999-0000",
            "date_hired": "2024-10-01"
        })
    );

    // ストアにも反映されている
    let (_, found) = request(app, Method::GET, "/api/employees/1", None).await;
    assert_eq!(found["data"], body["data"]);
}

#[tokio::test]
async fn test_未登録idの更新は404でupdateは呼ばれない() {
    let (app, repositories) = test_app();

    let (status, body) = request(
        app,
        Method::PUT,
        "/api/employees/999",
        Some(json!({
            "name": "田中次郎",
            "role": "Manager",
            "email": "jiro@example.com",
            "phone": "03-9999-0000",
            "date_hired": "2024-10-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Not Found");
    assert_eq!(repositories.employees.update_calls(), 0);
}

#[tokio::test]
async fn test_ボディのidはパスパラメータで上書きされる() {
    let (app, _repositories) = test_app();
    let (_, created) = request(
        app.clone(),
        Method::POST,
        "/api/employees/",
        Some(json!({
            "name": "田中一郎",
            "role": "Cashier",
            "email": "ichiro@example.com",
            "phone": "03-1234-5678",
            "date_hired": "2023-04-01"
        })),
    )
    .await;
    let id = created["data"]["employee_id"].as_str().unwrap().to_string();

    // ボディには別の employee_id を入れてもパスの ID が勝つ
    let (status, body) = request(
        app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({
            "employee_id": "999",
            "name": "田中次郎",
            "role": "Manager",
            "email": "jiro@example.com",
            "phone": "03-9999-0000",
            "date_hired": "2024-10-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employee_id"], id);
}

#[tokio::test]
async fn test_必須フィールド欠落の更新は400になる() {
    let (app, repositories) = test_app();
    repositories.employees.add(stored_employee("1"));

    // role と date_hired が欠落 → 既定値の空文字列がバリデーションで弾かれる
    let (status, body) = request(
        app,
        Method::PUT,
        "/api/employees/1",
        Some(json!({
            "name": "田中次郎",
            "email": "jiro@example.com",
            "phone": "03-9999-0000"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Bad Request");
    assert_eq!(repositories.employees.update_calls(), 0);
}
