//! # ルーター構築
//!
//! State の束ねとルーター定義を担当する。`main.rs` はインフラ初期化と
//! サーバー起動に集中する。
//!
//! ## ルート構成
//!
//! ```text
//! GET /health
//! /api（認証ミドルウェア配下）
//!   /categories  GET / | GET /{id} | POST / | PUT /{id} | DELETE /{id}
//!   /customers   （同上）
//!   /employees   （同上）
//!   /products    （同上）
//! ```

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handler::{self, CrudState},
    middleware::authenticate,
    usecase::{CategoryResource, CustomerResource, EmployeeResource, ProductResource, Resource},
};

/// リソースごとのハンドラ状態の束
pub struct AppStates {
    pub categories: Arc<CrudState<CategoryResource>>,
    pub customers:  Arc<CrudState<CustomerResource>>,
    pub employees:  Arc<CrudState<EmployeeResource>>,
    pub products:   Arc<CrudState<ProductResource>>,
}

/// 1 リソース分のルート（5 エンドポイント）を構築する
fn resource_routes<R: Resource>(state: Arc<CrudState<R>>) -> Router {
    Router::new()
        .route(
            "/",
            get(handler::list_all::<R>).post(handler::create::<R>),
        )
        .route(
            "/{id}",
            get(handler::get_by_id::<R>)
                .put(handler::update::<R>)
                .delete(handler::remove::<R>),
        )
        .with_state(state)
}

/// アプリケーション全体のルーターを構築する
pub fn build_app(states: AppStates) -> Router {
    let api = Router::new()
        .nest("/categories", resource_routes(states.categories))
        .nest("/customers", resource_routes(states.customers))
        .nest("/employees", resource_routes(states.employees))
        .nest("/products", resource_routes(states.products))
        .layer(from_fn(authenticate));

    Router::new()
        .route("/health", get(handler::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}
