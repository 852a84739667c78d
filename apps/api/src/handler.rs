//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲
//! - CRUD ハンドラは [`crate::usecase::Resource`] でジェネリックに一度だけ
//!   定義し、ルーター側でリソースごとに実体化する

pub mod crud;
pub mod health;

pub use crud::{CrudState, create, get_by_id, list_all, remove, update};
pub use health::health_check;
