//! # カスタムエクストラクタ
//!
//! axum 標準の `Json` は解読失敗時に素のテキストレスポンスを返すため、
//! 統一エンベロープ（400 / "Bad Request"）で応答するラッパーを提供する。

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;

/// 解読失敗を [`ServiceError::BadRequest`] に変換する JSON エクストラクタ
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(into_bad_request(&rejection)),
        }
    }
}

fn into_bad_request(rejection: &JsonRejection) -> ServiceError {
    ServiceError::BadRequest(rejection.body_text())
}
