// src/handlers/brands.rs

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

use crate::{common::error::AppError, config::AppState, models::Brand};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBrandPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/brands/",
    tag = "Brands",
    responses(
        (status = 200, description = "Todas as marcas", body = Vec<Brand>)
    )
)]
pub async fn get_all_brands(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let brands = app_state
        .category_service
        .get_all_brands(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(brands)))
}

#[utoipa::path(
    post,
    path = "/brands/",
    tag = "Brands",
    request_body = CreateBrandPayload,
    responses(
        (status = 200, description = "Marca criada", body = Brand),
        (status = 400, description = "Nome já existe")
    )
)]
pub async fn create_brand(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateBrandPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let brand = app_state
        .category_service
        .create_brand(&app_state.db_pool, &payload.name)
        .await?;

    Ok((StatusCode::OK, Json(brand)))
}

#[utoipa::path(
    delete,
    path = "/brands/{id}",
    tag = "Brands",
    params(("id" = i64, Path, description = "ID da marca")),
    responses(
        (status = 200, description = "Marca removida"),
        (status = 404, description = "Marca não encontrada")
    )
)]
pub async fn delete_brand(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted_id = app_state
        .category_service
        .delete_brand(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true, "deleted_id": deleted_id }))))
}
