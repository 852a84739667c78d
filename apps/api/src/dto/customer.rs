//! # 顧客 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 顧客作成リクエスト
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CustomerCreateRequest {
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name:           String,
    #[validate(email(message = "メールアドレスの形式が不正です"))]
    pub email:          String,
    #[validate(length(min = 1, max = 20, message = "電話番号は 1〜20 文字で入力してください"))]
    pub phone:          String,
    #[validate(length(max = 255, message = "住所は 255 文字以内で入力してください"))]
    pub address:        String,
    #[validate(range(min = 0, message = "ロイヤリティポイントは 0 以上で入力してください"))]
    pub loyalty_points: i32,
}

/// 顧客更新リクエスト
///
/// `customer_id` はパスパラメータからハンドラが注入する。
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CustomerUpdateRequest {
    #[validate(length(min = 1, message = "ID は必須です"))]
    pub customer_id:    String,
    #[validate(length(min = 1, max = 100, message = "名前は 1〜100 文字で入力してください"))]
    pub name:           String,
    #[validate(email(message = "メールアドレスの形式が不正です"))]
    pub email:          String,
    #[validate(length(min = 1, max = 20, message = "電話番号は 1〜20 文字で入力してください"))]
    pub phone:          String,
    #[validate(length(max = 255, message = "住所は 255 文字以内で入力してください"))]
    pub address:        String,
    #[validate(range(min = 0, message = "ロイヤリティポイントは 0 以上で入力してください"))]
    pub loyalty_points: i32,
}

/// 顧客レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer_id:    String,
    pub name:           String,
    pub email:          String,
    pub phone:          String,
    pub address:        String,
    pub loyalty_points: i32,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use validator::Validate;

    use super::*;

    fn valid_request() -> CustomerCreateRequest {
        CustomerCreateRequest {
            name:           "山田太郎".to_string(),
            email:          "taro@example.com".to_string(),
            phone:          "090-1234-5678".to_string(),
            address:        "東京都千代田区 1-2-3".to_string(),
            loyalty_points: 10,
        }
    }

    #[test]
    fn test_全フィールドが妥当ならバリデーションを通過する() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_名前が空だとバリデーションエラーになる() {
        let request = CustomerCreateRequest {
            name: String::new(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[rstest]
    #[case("")]
    #[case("taro")]
    #[case("taro@")]
    fn test_不正なメールアドレスはバリデーションエラーになる(#[case] email: &str) {
        let request = CustomerCreateRequest {
            email: email.to_string(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_負のロイヤリティポイントはバリデーションエラーになる() {
        let request = CustomerCreateRequest {
            loyalty_points: -1,
            ..valid_request()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_複数の違反はまとめて報告される() {
        let request = CustomerCreateRequest {
            name: String::new(),
            email: "不正".to_string(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_ボディに無いフィールドは既定値で解読される() {
        let request: CustomerCreateRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.loyalty_points, 0);
    }
}
