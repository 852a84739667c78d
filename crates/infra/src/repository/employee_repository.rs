//! # EmployeeRepository（PostgreSQL 実装）

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_domain::{Employee, Entity};
use uuid::Uuid;

use crate::{error::InfraError, repository::CrudRepository};

/// employees テーブルの行
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id:         String,
    name:       String,
    role:       String,
    email:      String,
    phone:      String,
    date_hired: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id:         row.id,
            name:       row.name,
            role:       row.role,
            email:      row.email,
            phone:      row.phone,
            date_hired: row.date_hired,
        }
    }
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// 新しいリポジトリインスタンスを作成する
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Employee> for PostgresEmployeeRepository {
    async fn save(&self, mut entity: Employee) -> Result<Employee, InfraError> {
        entity.assign_id(Uuid::now_v7().to_string());

        sqlx::query(
            "INSERT INTO employees (id, name, role, email, phone, date_hired)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.role)
        .bind(&entity.email)
        .bind(&entity.phone)
        .bind(&entity.date_hired)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn update(&self, entity: Employee) -> Result<Employee, InfraError> {
        sqlx::query(
            "UPDATE employees
             SET name = $2, role = $3, email = $4, phone = $5, date_hired = $6
             WHERE id = $1",
        )
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.role)
        .bind(&entity.email)
        .bind(&entity.phone)
        .bind(&entity.date_hired)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, InfraError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, role, email, phone, date_hired
             FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, role, email, phone, date_hired
             FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn delete(&self, entity: &Employee) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(&entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
