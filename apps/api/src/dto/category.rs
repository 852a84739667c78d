//! # カテゴリ DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// カテゴリ作成リクエスト
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CategoryCreateRequest {
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name: String,
}

/// カテゴリ更新リクエスト
///
/// `id` はパスパラメータからハンドラが注入する。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CategoryUpdateRequest {
    #[validate(length(min = 1, message = "ID は必須です"))]
    pub id:   String,
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name: String,
}

/// カテゴリレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id:   String,
    pub name: String,
}
