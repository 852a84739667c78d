//! # CRUD ハンドラ
//!
//! リソース共通の 5 エンドポイントをジェネリックに定義する。
//!
//! ## エンドポイント（リソースごとに実体化）
//!
//! - `GET /` - 全件取得
//! - `GET /{id}` - ID 検索
//! - `POST /` - 作成
//! - `PUT /{id}` - 更新（全置換）
//! - `DELETE /{id}` - 削除
//!
//! ステータスコードとエンベロープの対応は [`crate::error`] を参照。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use storefront_domain::Entity;
use storefront_shared::ApiResponse;

use crate::{
   error::ServiceError,
   extract::ApiJson,
   usecase::{CrudUseCase, Resource},
};

/// CRUD ハンドラの共有状態
pub struct CrudState<R: Resource> {
   pub usecase: CrudUseCase<R>,
}

/// パスパラメータの ID が空白でないことを確認する
fn ensure_id<R: Resource>(id: &str) -> Result<(), ServiceError> {
   if id.trim().is_empty() {
      return Err(ServiceError::InvalidId {
         entity: R::Entity::NAME,
      });
   }
   Ok(())
}

/// GET /
pub async fn list_all<R: Resource>(
   State(state): State<Arc<CrudState<R>>>,
) -> Result<impl IntoResponse, ServiceError> {
   let responses = state.usecase.find_all().await?;
   Ok((StatusCode::OK, Json(ApiResponse::ok(responses))))
}

/// GET /{id}
pub async fn get_by_id<R: Resource>(
   State(state): State<Arc<CrudState<R>>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
   ensure_id::<R>(&id)?;

   let response = state.usecase.find_by_id(&id).await?;
   Ok((StatusCode::OK, Json(ApiResponse::ok(response))))
}

/// POST /
pub async fn create<R: Resource>(
   State(state): State<Arc<CrudState<R>>>,
   ApiJson(request): ApiJson<R::Create>,
) -> Result<impl IntoResponse, ServiceError> {
   let response = state.usecase.create(request).await?;
   Ok((StatusCode::CREATED, Json(ApiResponse::created(response))))
}

/// PUT /{id}
///
/// ボディの ID はパスパラメータで常に上書きされる。
pub async fn update<R: Resource>(
   State(state): State<Arc<CrudState<R>>>,
   Path(id): Path<String>,
   ApiJson(mut request): ApiJson<R::Update>,
) -> Result<impl IntoResponse, ServiceError> {
   ensure_id::<R>(&id)?;
   R::assign_update_id(&mut request, id);

   let response = state.usecase.update(request).await?;
   Ok((StatusCode::OK, Json(ApiResponse::ok(response))))
}

/// DELETE /{id}
pub async fn remove<R: Resource>(
   State(state): State<Arc<CrudState<R>>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
   ensure_id::<R>(&id)?;

   state.usecase.delete(&id).await?;
   Ok((StatusCode::OK, Json(ApiResponse::<()>::deleted())))
}
