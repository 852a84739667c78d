//! 統合テスト共通ヘルパー
//!
//! モックリポジトリでアプリケーション一式を組み立て、
//! `tower::ServiceExt::oneshot` でリクエストを送る。

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use storefront_api::{
    handler::CrudState,
    router::{AppStates, build_app},
    usecase::CrudUseCase,
};
use storefront_domain::{Category, Customer, Employee, Product};
use storefront_infra::mock::MockRepository;
use tower::ServiceExt;

/// テストから参照できるモックリポジトリのハンドル
pub struct TestRepositories {
    pub categories: MockRepository<Category>,
    pub customers:  MockRepository<Customer>,
    pub employees:  MockRepository<Employee>,
    pub products:   MockRepository<Product>,
}

/// モックリポジトリ構成のテスト用アプリケーションを構築する
pub fn test_app() -> (Router, TestRepositories) {
    let repositories = TestRepositories {
        categories: MockRepository::new(),
        customers:  MockRepository::new(),
        employees:  MockRepository::new(),
        products:   MockRepository::new(),
    };

    let states = AppStates {
        categories: Arc::new(CrudState {
            usecase: CrudUseCase::new(Arc::new(repositories.categories.clone())),
        }),
        customers:  Arc::new(CrudState {
            usecase: CrudUseCase::new(Arc::new(repositories.customers.clone())),
        }),
        employees:  Arc::new(CrudState {
            usecase: CrudUseCase::new(Arc::new(repositories.employees.clone())),
        }),
        products:   Arc::new(CrudState {
            usecase: CrudUseCase::new(Arc::new(repositories.products.clone())),
        }),
    };

    (build_app(states), repositories)
}

/// JSON リクエストを送り、ステータスとボディ（JSON）を返す
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// 生のボディ（JSON として不正でもよい）を送るバリアント
pub async fn request_raw(
    app: Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();

    (status, value)
}
