// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError, config::AppState, models::InventoryByCategoryEntry,
};

// GET /dashboard/inventory_by_category
#[utoipa::path(
    get,
    path = "/dashboard/inventory_by_category",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Rollup de estoque por categoria", body = Vec<InventoryByCategoryEntry>)
    )
)]
pub async fn get_inventory_by_category(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entries = app_state
        .dashboard_service
        .inventory_by_category(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}
