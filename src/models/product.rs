// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Os nomes dos campos são o contrato com o frontend existente (snake_case,
// igual ao pos.db) — sem rename_all aqui.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    /// Rótulo livre de categoria — relação por string, não por chave.
    pub category: String,
    pub price: f64,
    pub cost_price: f64,
    pub stock: i64,
    pub has_vat: bool,
    pub image: Option<String>,
}
