// src/models/sale.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sale {
    pub id: i64,
    /// Referência fraca: o produto pode ser apagado depois da venda.
    pub product_id: i64,
    /// Snapshot do nome no momento da venda — não acompanha renomeações.
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}
