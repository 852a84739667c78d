//! # ミドルウェア
//!
//! `/api` グループに適用するミドルウェアを提供する。

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// 認証ミドルウェア
///
/// 認証基盤が導入されるまでのパススルー実装。リクエストを記録して
/// そのまま通す。`/api` 配下の全ルートに適用される。
pub async fn authenticate(request: Request<Body>, next: Next) -> Response {
    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        "api リクエストを受理しました"
    );

    next.run(request).await
}
