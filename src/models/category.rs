// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// A coluna do rótulo localizado chama-se literalmente `thai` no pos.db
// (era `name_th` no esquema legado — ver ReconciliationJob).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    /// Nome em inglês, único (case-insensitive após reconciliação).
    pub name: String,
    pub thai: Option<String>,
    pub image: Option<String>,
}

// Marcas são apenas uma lista de consulta — nenhuma relação com Product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}
