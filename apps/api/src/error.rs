//! # API エラー定義
//!
//! サービス層が返す閉じたエラー列挙と、HTTP レスポンス（統一エンベロープ）への
//! 変換を定義する。
//!
//! ## エラー種別と HTTP ステータスの対応
//!
//! | バリアント | HTTP | status テキスト |
//! |-----------|------|----------------|
//! | `Validation` | 400 | `Bad Request` |
//! | `BadRequest` | 400 | `Bad Request` |
//! | `InvalidId` | 400 | `Invalid <Entity> ID` |
//! | `NotFound` | 404 | `Not Found` |
//! | `Persistence` | 500 | `Internal Server Error` |
//!
//! `Validation` / `NotFound` / `Persistence` はサービス層が送出する。
//! `BadRequest`（ボディの解読失敗）と `InvalidId`（空のパス ID）は
//! ハンドラ境界でのみ発生し、サービス層には到達しない。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use storefront_infra::InfraError;
use storefront_shared::ApiResponse;
use thiserror::Error;
use validator::ValidationErrors;

/// API で発生するエラー
///
/// リトライは行わない。すべての失敗は当該リクエストで終結し、
/// メッセージはレスポンスの `data` にそのまま載せて呼び出し元へ報告する。
#[derive(Debug, Error)]
pub enum ServiceError {
   /// バリデーションエラー（違反したフィールド/ルールの集約）
   ///
   /// リポジトリ呼び出しの前に送出される。
   #[error("バリデーションエラー: {0}")]
   Validation(#[from] ValidationErrors),

   /// リクエストボディの解読失敗
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// パスパラメータの ID が空
   #[error("{entity} ID が指定されていません")]
   InvalidId {
      /// エンティティ種別名（"Category" など）
      entity: &'static str,
   },

   /// エンティティが見つからない
   ///
   /// 更新・削除・取得の前段のルックアップが外れた場合に、
   /// サービス層が明示的に送出する。
   #[error("{entity} が見つかりません: {id}")]
   NotFound {
      /// エンティティ種別名（"Category" など）
      entity: &'static str,
      /// 検索に使用した識別子
      id:     String,
   },

   /// 永続化層の失敗（理由はそのまま引き渡す）
   #[error("永続化エラー: {0}")]
   Persistence(#[from] InfraError),
}

impl ServiceError {
   /// `NotFound` エラーを生成する
   pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
      Self::NotFound {
         entity,
         id: id.into(),
      }
   }
}

impl IntoResponse for ServiceError {
   fn into_response(self) -> Response {
      let (status, status_text, detail) = match &self {
         Self::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            "Bad Request".to_string(),
            errors.to_string(),
         ),
         Self::BadRequest(message) => (
            StatusCode::BAD_REQUEST,
            "Bad Request".to_string(),
            message.clone(),
         ),
         Self::InvalidId { entity } => (
            StatusCode::BAD_REQUEST,
            format!("Invalid {entity} ID"),
            self.to_string(),
         ),
         Self::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            "Not Found".to_string(),
            self.to_string(),
         ),
         Self::Persistence(err) => {
            tracing::error!("永続化エラー: {err}");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               "Internal Server Error".to_string(),
               err.to_string(),
            )
         }
      };

      (
         status,
         Json(ApiResponse::error(status.as_u16(), status_text, detail)),
      )
         .into_response()
   }
}
