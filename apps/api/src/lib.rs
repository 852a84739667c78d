//! # Storefront API ライブラリ
//!
//! ハンドラ・ユースケース・DTO を公開する。
//! 統合テスト（`tests/`）からルーター一式を組み立てられるようにする。

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handler;
pub mod mapper;
pub mod middleware;
pub mod router;
pub mod usecase;
