// src/handlers/sales.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::Sale};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSalePayload {
    pub product_id: i64,

    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i64,

    // O frontend antigo manda o total calculado; se faltar, o servidor
    // calcula price * quantity.
    pub total_price: Option<f64>,
}

#[utoipa::path(
    post,
    path = "/sales/",
    tag = "Sales",
    request_body = CreateSalePayload,
    responses(
        (status = 200, description = "Venda registrada e estoque baixado", body = Sale),
        (status = 404, description = "Produto não encontrado"),
        (status = 400, description = "Estoque insuficiente")
    )
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sale = app_state
        .sale_service
        .create_sale(
            &app_state.db_pool,
            payload.product_id,
            payload.quantity,
            payload.total_price,
        )
        .await?;

    Ok((StatusCode::OK, Json(sale)))
}

#[utoipa::path(
    get,
    path = "/sales/",
    tag = "Sales",
    responses(
        (status = 200, description = "Todas as vendas", body = Vec<Sale>)
    )
)]
pub async fn get_all_sales(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state.sale_service.get_all_sales(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(sales)))
}

#[utoipa::path(
    delete,
    path = "/sales/{id}",
    tag = "Sales",
    params(("id" = i64, Path, description = "ID da venda")),
    responses(
        (status = 200, description = "Venda removida, estoque estornado se o produto existir"),
        (status = 404, description = "Venda não encontrada")
    )
)]
pub async fn delete_sale(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.sale_service.delete_sale(&app_state.db_pool, id).await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true }))))
}
