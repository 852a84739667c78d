//! # ワイヤ DTO
//!
//! API 境界で交換するデータ形状を定義する。
//!
//! ## 設計方針
//!
//! - エンティティごとに CreateRequest（ID なし・検証あり）、
//!   UpdateRequest（ID + 検証あり）、Response（全フィールド + ID）の 3 形状
//! - リクエストは構造体単位で `#[serde(default)]`:
//!   ボディに無いフィールドは既定値になり、その是非はバリデーションが判定する
//! - バリデーションルールは `validator` の derive で宣言的に記述する

pub mod category;
pub mod customer;
pub mod employee;
pub mod product;

pub use category::{CategoryCreateRequest, CategoryResponse, CategoryUpdateRequest};
pub use customer::{CustomerCreateRequest, CustomerResponse, CustomerUpdateRequest};
pub use employee::{EmployeeCreateRequest, EmployeeResponse, EmployeeUpdateRequest};
pub use product::{ProductCreateRequest, ProductResponse, ProductUpdateRequest};
