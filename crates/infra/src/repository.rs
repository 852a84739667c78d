//! # リポジトリ
//!
//! エンティティごとの CRUD 永続化契約と、その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **単一のジェネリックトレイト**: 4 エンティティの CRUD 契約は形が
//!   完全に一致するため、[`CrudRepository<E>`] として一度だけ定義する
//! - **not-found の区別**: `find_by_id` は `Ok(None)` を返すことで
//!   「存在しない」を他の失敗（[`InfraError`]）と区別する
//! - **ID 採番**: `save` がエンティティに UUID v7 文字列を採番してから
//!   INSERT する。呼び出し元は採番済みエンティティを受け取る

pub mod category_repository;
pub mod customer_repository;
pub mod employee_repository;
pub mod product_repository;

use async_trait::async_trait;

use crate::error::InfraError;

pub use category_repository::PostgresCategoryRepository;
pub use customer_repository::PostgresCustomerRepository;
pub use employee_repository::PostgresEmployeeRepository;
pub use product_repository::PostgresProductRepository;

/// エンティティ単位の CRUD 永続化契約
///
/// ユースケース層はこのトレイト越しにのみ永続化へアクセスする。
#[async_trait]
pub trait CrudRepository<E>: Send + Sync {
    /// 新規エンティティを採番して保存し、採番済みエンティティを返す
    async fn save(&self, entity: E) -> Result<E, InfraError>;

    /// 既存エンティティを全フィールド上書きで更新する
    ///
    /// 存在確認はユースケース層の責務（更新前に `find_by_id` を呼ぶ）。
    async fn update(&self, entity: E) -> Result<E, InfraError>;

    /// ID で検索する。存在しなければ `Ok(None)`
    async fn find_by_id(&self, id: &str) -> Result<Option<E>, InfraError>;

    /// 全件取得する。空のストアでは空の Vec
    async fn find_all(&self) -> Result<Vec<E>, InfraError>;

    /// 解決済みエンティティを削除する
    async fn delete(&self, entity: &E) -> Result<(), InfraError>;
}
