// src/handlers/products.rs

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
    models::Product,
    services::ProductChanges,
};

// ---
// Payload: CreateProduct
// ---
// price/cost_price/stock são Option + required: ausência vira 422 com a
// mensagem do campo, em vez de um erro genérico de desserialização.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductPayload {
    pub name: String,
    pub sku: String,
    pub category: String,

    #[validate(required(message = "price is required"))]
    pub price: Option<f64>,

    #[validate(required(message = "cost_price is required"))]
    pub cost_price: Option<f64>,

    #[validate(required(message = "stock is required"))]
    pub stock: Option<i64>,

    #[serde(default)]
    pub has_vat: bool,

    pub image: Option<String>,
}

// ---
// Payload: UpdateProduct (parcial — só os campos enviados são aplicados)
// ---
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductPayload {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub cost_price: Option<f64>,
    pub stock: Option<i64>,
    pub has_vat: Option<bool>,
    pub image: Option<String>,
}

#[utoipa::path(
    post,
    path = "/products/",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 200, description = "Produto criado", body = Product),
        (status = 422, description = "cost_price/price/stock ausente")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .catalog_service
        .create_product(
            &app_state.db_pool,
            &payload.name,
            &payload.sku,
            &payload.category,
            payload.price.unwrap(),
            payload.cost_price.unwrap(),
            payload.stock.unwrap(),
            payload.has_vat,
            payload.image.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Todos os produtos", body = Vec<Product>)
    )
)]
pub async fn get_all_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .catalog_service
        .get_all_products(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    request_body = UpdateProductPayload,
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let changes = ProductChanges {
        name: payload.name,
        sku: payload.sku,
        category: payload.category,
        price: payload.price,
        cost_price: payload.cost_price,
        stock: payload.stock,
        has_vat: payload.has_vat,
        image: payload.image,
    };

    let product = app_state
        .catalog_service
        .update_product(&app_state.db_pool, id, changes)
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .catalog_service
        .delete_product(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "ok": true }))))
}
