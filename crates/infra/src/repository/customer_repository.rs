//! # CustomerRepository（PostgreSQL 実装）

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_domain::{Customer, Entity};
use uuid::Uuid;

use crate::{error::InfraError, repository::CrudRepository};

/// customers テーブルの行
#[derive(sqlx::FromRow)]
struct CustomerRow {
    id:          String,
    name:        String,
    email:       String,
    phone:       String,
    address:     String,
    loyalty_pts: i32,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id:          row.id,
            name:        row.name,
            email:       row.email,
            phone:       row.phone,
            address:     row.address,
            loyalty_pts: row.loyalty_pts,
        }
    }
}

/// PostgreSQL 実装の CustomerRepository
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// 新しいリポジトリインスタンスを作成する
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Customer> for PostgresCustomerRepository {
    async fn save(&self, mut entity: Customer) -> Result<Customer, InfraError> {
        entity.assign_id(Uuid::now_v7().to_string());

        sqlx::query(
            "INSERT INTO customers (id, name, email, phone, address, loyalty_pts)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(&entity.phone)
        .bind(&entity.address)
        .bind(entity.loyalty_pts)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn update(&self, entity: Customer) -> Result<Customer, InfraError> {
        sqlx::query(
            "UPDATE customers
             SET name = $2, email = $3, phone = $4, address = $5, loyalty_pts = $6
             WHERE id = $1",
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(&entity.phone)
        .bind(&entity.address)
        .bind(entity.loyalty_pts)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, InfraError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, phone, address, loyalty_pts
             FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn find_all(&self) -> Result<Vec<Customer>, InfraError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, phone, address, loyalty_pts
             FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn delete(&self, entity: &Customer) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(&entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
