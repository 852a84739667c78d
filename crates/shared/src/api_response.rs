//! # API レスポンスエンベロープ
//!
//! 全エンドポイント共通のレスポンス形式 `{ "code": <int>, "status": <string>,
//! "data": <any> }` を提供する。
//!
//! ## 使用箇所
//!
//! - ハンドラ（成功レスポンスの組み立て）
//! - エラー変換（`ServiceError` → エンベロープ）
//! - 統合テスト（レスポンスのデシリアライズ）
//!
//! `data` は削除成功やエラー以外では常に設定される。`None` の場合は
//! JSON からフィールドごと省略される（`"data": null` にはならない）。

use serde::{Deserialize, Serialize};

/// 統一レスポンスエンベロープ
///
/// `code` は HTTP ステータスコードの写し、`status` は人間可読なステータス
/// テキスト（`"OK"`, `"Created"`, `"Not Found"` など）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code:   u16,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data:   Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 OK（取得・更新成功）
    pub fn ok(data: T) -> Self {
        Self {
            code:   200,
            status: "OK".to_string(),
            data:   Some(data),
        }
    }

    /// 201 Created（作成成功）
    pub fn created(data: T) -> Self {
        Self {
            code:   201,
            status: "Created".to_string(),
            data:   Some(data),
        }
    }

    /// data なしのレスポンス
    pub fn status_only(code: u16, status: impl Into<String>) -> Self {
        Self {
            code,
            status: status.into(),
            data: None,
        }
    }

    /// 200 Deleted Successfully（削除成功、data なし）
    pub fn deleted() -> Self {
        Self::status_only(200, "Deleted Successfully")
    }

    /// エラーレスポンス（data にエラーメッセージ等を載せる）
    pub fn error(code: u16, status: impl Into<String>, detail: T) -> Self {
        Self {
            code,
            status: status.into(),
            data: Some(detail),
        }
    }
}
