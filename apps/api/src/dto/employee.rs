//! # 従業員 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 従業員作成リクエスト
///
/// `date_hired` は必須だが日付形式の検証は行わない（自由文字列）。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EmployeeCreateRequest {
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name:       String,
    #[validate(length(min = 1, max = 50, message = "役職は 1〜50 文字で入力してください"))]
    pub role:       String,
    #[validate(email(message = "メールアドレスの形式が不正です"))]
    pub email:      String,
    #[validate(length(min = 1, max = 20, message = "電話番号は 1〜20 文字で入力してください"))]
    pub phone:      String,
    #[validate(length(min = 1, message = "入社日は必須です"))]
    pub date_hired: String,
}

/// 従業員更新リクエスト
///
/// `employee_id` はパスパラメータからハンドラが注入する。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EmployeeUpdateRequest {
    #[validate(length(min = 1, message = "ID は必須です"))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name:        String,
    #[validate(length(min = 1, max = 50, message = "役職は 1〜50 文字で入力してください"))]
    pub role:        String,
    #[validate(email(message = "メールアドレスの形式が不正です"))]
    pub email:       String,
    #[validate(length(min = 1, max = 20, message = "電話番号は 1〜20 文字で入力してください"))]
    pub phone:       String,
    #[validate(length(min = 1, message = "入社日は必須です"))]
    pub date_hired:  String,
}

/// 従業員レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub name:        String,
    pub role:        String,
    pub email:       String,
    pub phone:       String,
    pub date_hired:  String,
}
