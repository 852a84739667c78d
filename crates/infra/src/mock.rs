//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! storefront-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ## 呼び出し回数の記録
//!
//! 「存在しない ID の更新・削除ではリポジトリの update / delete が
//! 呼ばれない」というサービス層の契約を検証できるよう、
//! 変更系メソッドの呼び出し回数を記録する。

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use storefront_domain::Entity;
use uuid::Uuid;

use crate::{error::InfraError, repository::CrudRepository};

/// インメモリのジェネリックモックリポジトリ
///
/// `Clone` してもストレージとカウンタは共有される（`Arc` 共有）。
/// テスト側でハンドルを保持したままユースケースに渡す使い方を想定。
pub struct MockRepository<E: Entity> {
    entities:     Arc<Mutex<Vec<E>>>,
    save_calls:   Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
    delete_calls: Arc<AtomicUsize>,
    fail_with:    Arc<Mutex<Option<String>>>,
}

impl<E: Entity> Clone for MockRepository<E> {
    fn clone(&self) -> Self {
        Self {
            entities:     Arc::clone(&self.entities),
            save_calls:   Arc::clone(&self.save_calls),
            update_calls: Arc::clone(&self.update_calls),
            delete_calls: Arc::clone(&self.delete_calls),
            fail_with:    Arc::clone(&self.fail_with),
        }
    }
}

impl<E: Entity> Default for MockRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MockRepository<E> {
    /// 空のモックリポジトリを作成する
    pub fn new() -> Self {
        Self {
            entities:     Arc::new(Mutex::new(Vec::new())),
            save_calls:   Arc::new(AtomicUsize::new(0)),
            update_calls: Arc::new(AtomicUsize::new(0)),
            delete_calls: Arc::new(AtomicUsize::new(0)),
            fail_with:    Arc::new(Mutex::new(None)),
        }
    }

    /// ID 採番済みのエンティティを事前投入する
    pub fn add(&self, entity: E) {
        self.entities.lock().unwrap().push(entity);
    }

    /// 以降のすべての操作を指定メッセージで失敗させる
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// `save` の呼び出し回数
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// `update` の呼び出し回数
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// `delete` の呼び出し回数
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn injected_failure(&self) -> Option<InfraError> {
        self.fail_with
            .lock()
            .unwrap()
            .as_ref()
            .map(|message| InfraError::Unexpected(message.clone()))
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for MockRepository<E> {
    async fn save(&self, mut entity: E) -> Result<E, InfraError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        entity.assign_id(Uuid::now_v7().to_string());
        self.entities.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, InfraError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        let mut entities = self.entities.lock().unwrap();
        if let Some(pos) = entities.iter().position(|e| e.id() == entity.id()) {
            entities[pos] = entity.clone();
        }
        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, InfraError> {
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        Ok(self
            .entities
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, InfraError> {
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        Ok(self.entities.lock().unwrap().clone())
    }

    async fn delete(&self, entity: &E) -> Result<(), InfraError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        self.entities.lock().unwrap().retain(|e| e.id() != entity.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use storefront_domain::Category;

    use super::*;

    #[tokio::test]
    async fn test_saveはidを採番して保存する() {
        let repo = MockRepository::<Category>::new();

        let saved = repo
            .save(Category {
                id:   String::new(),
                name: "飲料".to_string(),
            })
            .await
            .unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(repo.find_by_id(&saved.id).await.unwrap(), Some(saved));
        assert_eq!(repo.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_find_by_idは未登録idでnoneを返す() {
        let repo = MockRepository::<Category>::new();

        assert_eq!(repo.find_by_id("99").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deleteは対象のみ削除する() {
        let repo = MockRepository::<Category>::new();
        let kept = Category {
            id:   "1".to_string(),
            name: "食品".to_string(),
        };
        let removed = Category {
            id:   "2".to_string(),
            name: "日用品".to_string(),
        };
        repo.add(kept.clone());
        repo.add(removed.clone());

        repo.delete(&removed).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![kept]);
        assert_eq!(repo.delete_calls(), 1);
    }

    #[tokio::test]
    async fn test_fail_withは以降の操作を失敗させる() {
        let repo = MockRepository::<Category>::new();
        repo.fail_with("接続が切断されました");

        let result = repo.find_all().await;

        assert!(matches!(result, Err(InfraError::Unexpected(_))));
    }
}
