// src/db/dashboard_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{common::error::AppError, models::InventoryByCategoryEntry};

#[derive(Clone, Default)]
pub struct DashboardRepository;

impl DashboardRepository {
    pub fn new() -> Self {
        Self
    }

    /// Rollup de estoque por rótulo de categoria dos produtos.
    /// Agrupa pelo rótulo livre, não pela tabela category — rótulos órfãos
    /// (categoria apagada) continuam aparecendo aqui.
    pub async fn inventory_by_category<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<InventoryByCategoryEntry>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let entries = sqlx::query_as::<_, InventoryByCategoryEntry>(
            r#"
            SELECT
                category,
                COUNT(*)                        AS product_count,
                COALESCE(SUM(stock), 0)         AS total_stock,
                COALESCE(SUM(stock * price), 0) AS total_value
            FROM product
            GROUP BY category
            ORDER BY category ASC
            "#,
        )
        .fetch_all(executor)
        .await?;
        Ok(entries)
    }
}
