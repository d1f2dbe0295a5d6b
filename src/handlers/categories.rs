// src/handlers/categories.rs

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

use crate::{
    common::error::AppError,
    config::AppState,
    models::Category,
    services::CategoryChanges,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub thai: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryPayload {
    pub name: Option<String>,
    pub thai: Option<String>,
    pub image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/categories/",
    tag = "Categories",
    responses(
        (status = 200, description = "Todas as categorias", body = Vec<Category>)
    )
)]
pub async fn get_all_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = app_state
        .category_service
        .get_all_categories(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    post,
    path = "/categories/",
    tag = "Categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 200, description = "Categoria criada", body = Category),
        (status = 400, description = "Nome já existe")
    )
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let category = app_state
        .category_service
        .create_category(
            &app_state.db_pool,
            &payload.name,
            payload.thai.as_deref(),
            payload.image.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(category)))
}

#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    request_body = UpdateCategoryPayload,
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria atualizada (renomeação cascateia aos produtos)", body = Category),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn update_category(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let changes = CategoryChanges {
        name: payload.name,
        thai: payload.thai,
        image: payload.image,
    };

    let category = app_state
        .category_service
        .update_category(&app_state.db_pool, id, changes)
        .await?;

    Ok((StatusCode::OK, Json(category)))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Categoria removida (produtos com o rótulo ficam como estão)"),
        (status = 404, description = "Categoria não encontrada")
    )
)]
pub async fn delete_category(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted_id = app_state
        .category_service
        .delete_category(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true, "deleted_id": deleted_id }))))
}
