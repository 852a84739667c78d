//! # CRUD ユースケース
//!
//! バリデーション → リポジトリ呼び出し → DTO 変換を編成する中核。
//!
//! ## 存在確認プロトコル
//!
//! 更新と削除は必ずルックアップを先行させる:
//!
//! 1. `find_by_id` で対象を解決する（外れたら `NotFound` で短絡）
//! 2. 解決済みエンティティに対してのみ `update` / `delete` を呼ぶ
//!
//! これにより、存在しない ID への変更操作が汎用エラーや暗黙の成功ではなく
//! `NotFound` として報告される。ルックアップと変更の間はトランザクションで
//! 保護しない（後勝ち）。
//!
//! ## バリデーション
//!
//! 宣言されたフィールド制約（[`Validate`]）への違反はすべて集約され、
//! リポジトリ呼び出しの前に `Validation` エラーとして短絡する。

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use storefront_domain::Entity;
use storefront_infra::repository::CrudRepository;
use validator::Validate;

use crate::error::ServiceError;

/// リソース固有の差分を埋めるトレイト
///
/// エンティティ型・リクエスト型・レスポンス型と、その間の写し替えを束ねる。
/// 実装は状態を持たない（[`resources`](crate::usecase::resources) 参照）。
pub trait Resource: Send + Sync + 'static {
   /// 保存されるエンティティ
   type Entity: Entity;
   /// 作成リクエスト（ID なし・検証あり）
   type Create: DeserializeOwned + Validate + Send + 'static;
   /// 更新リクエスト（ID + 検証あり）
   type Update: DeserializeOwned + Validate + Send + 'static;
   /// レスポンス DTO（全フィールド + ID）
   type Response: Serialize + Send + 'static;

   /// 作成リクエストから未採番のエンティティを構築する
   fn new_entity(request: Self::Create) -> Self::Entity;

   /// 更新リクエストの対象 ID を返す
   fn update_id(request: &Self::Update) -> &str;

   /// パスパラメータの ID を更新リクエストに注入する
   fn assign_update_id(request: &mut Self::Update, id: String);

   /// 更新リクエストの内容で全可変フィールドを上書きする
   ///
   /// 部分更新は行わない。リクエストで省略されたフィールドは
   /// 既定値（空文字列・0）で上書きされる。
   fn overwrite(entity: &mut Self::Entity, request: Self::Update);

   /// エンティティをレスポンスに変換する（マッパーへの委譲）
   fn to_response(entity: Self::Entity) -> Self::Response;

   /// エンティティ列をレスポンス列に変換する（マッパーへの委譲）
   fn to_responses(entities: Vec<Self::Entity>) -> Vec<Self::Response>;
}

/// リソースごとに 1 つ構築される CRUD サービス
///
/// コラボレータ（リポジトリ）は構築時に一度だけ注入され、
/// 以降は不変の状態として保持される。
pub struct CrudUseCase<R: Resource> {
   repository: Arc<dyn CrudRepository<R::Entity>>,
}

impl<R: Resource> CrudUseCase<R> {
   pub fn new(repository: Arc<dyn CrudRepository<R::Entity>>) -> Self {
      Self { repository }
   }

   /// リソースを作成する
   ///
   /// 1. リクエストを検証（違反があれば `Validation` で短絡）
   /// 2. 未採番エンティティを構築してリポジトリに保存（ID 採番）
   /// 3. 保存結果をレスポンスに変換
   pub async fn create(&self, request: R::Create) -> Result<R::Response, ServiceError> {
      request.validate()?;

      let entity = R::new_entity(request);
      let saved = self.repository.save(entity).await?;
      Ok(R::to_response(saved))
   }

   /// リソースを更新する（全フィールド上書き）
   ///
   /// 対象が存在しない場合、リポジトリの `update` は呼ばれない。
   pub async fn update(&self, request: R::Update) -> Result<R::Response, ServiceError> {
      request.validate()?;

      let id = R::update_id(&request).to_string();
      let mut entity = self
         .repository
         .find_by_id(&id)
         .await?
         .ok_or_else(|| ServiceError::not_found(R::Entity::NAME, &id))?;

      R::overwrite(&mut entity, request);
      let updated = self.repository.update(entity).await?;
      Ok(R::to_response(updated))
   }

   /// リソースを削除する
   ///
   /// ルックアップで解決したエンティティを渡して削除する。
   /// 対象が存在しない場合、リポジトリの `delete` は呼ばれない。
   pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
      let entity = self
         .repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ServiceError::not_found(R::Entity::NAME, id))?;

      self.repository.delete(&entity).await?;
      Ok(())
   }

   /// ID でリソースを取得する
   pub async fn find_by_id(&self, id: &str) -> Result<R::Response, ServiceError> {
      let entity = self
         .repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| ServiceError::not_found(R::Entity::NAME, id))?;

      Ok(R::to_response(entity))
   }

   /// 全リソースを取得する（空のストアでは空列）
   pub async fn find_all(&self) -> Result<Vec<R::Response>, ServiceError> {
      let entities = self.repository.find_all().await?;
      Ok(R::to_responses(entities))
   }
}
