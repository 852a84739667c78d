//! # 商品 DTO
//!
//! `category` / `sku` / `description` は空文字列を既定値として受け付け、
//! 名前と価格だけの最小リクエストでも作成できる。

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 商品作成リクエスト
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProductCreateRequest {
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name:        String,
    #[validate(length(max = 500, message = "説明は 500 文字以内で入力してください"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "価格は 0 以上で入力してください"))]
    pub price:       f64,
    #[validate(range(min = 0, message = "在庫数は 0 以上で入力してください"))]
    pub stock_qty:   i32,
    pub category:    String,
    #[validate(length(max = 50, message = "SKU は 50 文字以内で入力してください"))]
    pub sku:         String,
    #[validate(range(min = 0.0, message = "税率は 0 以上で入力してください"))]
    pub tax_rate:    f64,
}

/// 商品更新リクエスト
///
/// `product_id` はパスパラメータからハンドラが注入する。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProductUpdateRequest {
    #[validate(length(min = 1, message = "ID は必須です"))]
    pub product_id:  String,
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name:        String,
    #[validate(length(max = 500, message = "説明は 500 文字以内で入力してください"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "価格は 0 以上で入力してください"))]
    pub price:       f64,
    #[validate(range(min = 0, message = "在庫数は 0 以上で入力してください"))]
    pub stock_qty:   i32,
    pub category:    String,
    #[validate(length(max = 50, message = "SKU は 50 文字以内で入力してください"))]
    pub sku:         String,
    #[validate(range(min = 0.0, message = "税率は 0 以上で入力してください"))]
    pub tax_rate:    f64,
}

/// 商品レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product_id:  String,
    pub name:        String,
    pub description: String,
    pub price:       f64,
    pub stock_qty:   i32,
    pub category:    String,
    pub sku:         String,
    pub tax_rate:    f64,
}
