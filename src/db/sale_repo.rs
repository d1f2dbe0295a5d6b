// src/db/sale_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::{common::error::AppError, models::Sale};

#[derive(Clone, Default)]
pub struct SaleRepository;

impl SaleRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_all<'e, E>(&self, executor: E) -> Result<Vec<Sale>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sales = sqlx::query_as::<_, Sale>(
            "SELECT id, product_id, product_name, quantity, total_price, created_at
             FROM sale ORDER BY id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(sales)
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        product_id: i64,
        product_name: &str,
        quantity: i64,
        total_price: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sale (product_id, product_name, quantity, total_price, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, product_id, product_name, quantity, total_price, created_at
            "#,
        )
        .bind(product_id)
        .bind(product_name)
        .bind(quantity)
        .bind(total_price)
        .bind(created_at)
        .fetch_one(executor)
        .await?;
        Ok(sale)
    }

    /// Remove a venda devolvendo a linha apagada (`None` se não existia).
    /// Escrita como primeira instrução da transação de exclusão, pelo mesmo
    /// motivo de `ProductRepository::try_decrement_stock`.
    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<Option<Sale>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            DELETE FROM sale WHERE id = ?1
            RETURNING id, product_id, product_name, quantity, total_price, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(sale)
    }
}
