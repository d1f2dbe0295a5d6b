// src/models/dashboard.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Rollup de estoque por categoria (GROUP BY product.category).
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct InventoryByCategoryEntry {
    pub category: String,
    pub product_count: i64,
    pub total_stock: i64,
    /// SUM(stock * price) — valor de venda do estoque parado.
    pub total_value: f64,
}
