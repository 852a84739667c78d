//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` を `#[from]` でラップ
//! - **not-found との分離**: 「見つからない」はエラーではなく
//!   `Option::None` で表現する。このエラー型は通信・制約違反など
//!   それ以外の失敗のみを表す

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// ユースケース層はこのエラーを `Persistence` エラーとして呼び出し元へ
/// そのまま引き渡す。
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    ///
    /// SQL の実行失敗、接続エラー、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),

    /// 予期しないエラー
    ///
    /// データベース以外に起因する失敗（主にテスト時の注入用）。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}
