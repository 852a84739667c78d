//! # エンティティ共通トレイト
//!
//! 4 エンティティの CRUD パイプラインを 1 つのジェネリックな実装で賄うための
//! 最小限の共通インターフェース。
//!
//! ## 設計方針
//!
//! - `NAME` はエラーメッセージ用のエンティティ種別名（`"Category"` など）
//! - `id` / `assign_id` はリポジトリとモックが採番・検索に使う唯一の
//!   共通アクセサ。属性フィールドには一切触れない

/// 一意な識別子を持つ永続化対象
///
/// ID は永続化層が `save` 時に採番する。採番前（作成リクエストから
/// 構築した直後）は空文字列である。
pub trait Entity: Clone + Send + Sync + 'static {
    /// エンティティ種別名（`NotFound` エラー等で使用）
    const NAME: &'static str;

    /// 採番済み ID を返す（未採番なら空文字列）
    fn id(&self) -> &str;

    /// 永続化層が採番した ID を設定する
    fn assign_id(&mut self, id: String);
}
