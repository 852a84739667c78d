//! # CategoryRepository（PostgreSQL 実装）

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_domain::{Category, Entity};
use uuid::Uuid;

use crate::{error::InfraError, repository::CrudRepository};

/// categories テーブルの行
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id:   String,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id:   row.id,
            name: row.name,
        }
    }
}

/// PostgreSQL 実装の CategoryRepository
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// 新しいリポジトリインスタンスを作成する
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Category> for PostgresCategoryRepository {
    async fn save(&self, mut entity: Category) -> Result<Category, InfraError> {
        entity.assign_id(Uuid::now_v7().to_string());

        sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
            .bind(&entity.id)
            .bind(&entity.name)
            .execute(&self.pool)
            .await?;

        Ok(entity)
    }

    async fn update(&self, entity: Category) -> Result<Category, InfraError> {
        sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(&entity.id)
            .bind(&entity.name)
            .execute(&self.pool)
            .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, InfraError> {
        let row =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Category::from))
    }

    async fn find_all(&self) -> Result<Vec<Category>, InfraError> {
        let rows =
            sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn delete(&self, entity: &Category) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(&entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
