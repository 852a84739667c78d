//! # Storefront インフラ層
//!
//! PostgreSQL への永続化を担当する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層は [`repository::CrudRepository`]
//!   トレイト越しにのみ永続化へアクセスする
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理を
//!   このクレート内にカプセル化
//! - **テスタビリティ**: `test-utils` feature でインメモリモックを公開

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
