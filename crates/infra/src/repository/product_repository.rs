//! # ProductRepository（PostgreSQL 実装）

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_domain::{Entity, Product};
use uuid::Uuid;

use crate::{error::InfraError, repository::CrudRepository};

/// products テーブルの行
#[derive(sqlx::FromRow)]
struct ProductRow {
    id:          String,
    name:        String,
    description: String,
    price:       f64,
    stock_qty:   i32,
    category:    String,
    sku:         String,
    tax_rate:    f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id:          row.id,
            name:        row.name,
            description: row.description,
            price:       row.price,
            stock_qty:   row.stock_qty,
            category:    row.category,
            sku:         row.sku,
            tax_rate:    row.tax_rate,
        }
    }
}

/// PostgreSQL 実装の ProductRepository
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// 新しいリポジトリインスタンスを作成する
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Product> for PostgresProductRepository {
    async fn save(&self, mut entity: Product) -> Result<Product, InfraError> {
        entity.assign_id(Uuid::now_v7().to_string());

        sqlx::query(
            "INSERT INTO products
                 (id, name, description, price, stock_qty, category, sku, tax_rate)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(entity.stock_qty)
        .bind(&entity.category)
        .bind(&entity.sku)
        .bind(entity.tax_rate)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn update(&self, entity: Product) -> Result<Product, InfraError> {
        sqlx::query(
            "UPDATE products
             SET name = $2, description = $3, price = $4, stock_qty = $5,
                 category = $6, sku = $7, tax_rate = $8
             WHERE id = $1",
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(entity.stock_qty)
        .bind(&entity.category)
        .bind(&entity.sku)
        .bind(entity.tax_rate)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, InfraError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock_qty, category, sku, tax_rate
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, stock_qty, category, sku, tax_rate
             FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete(&self, entity: &Product) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(&entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
