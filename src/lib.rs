// src/lib.rs

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;

/// Monta o router completo. Fica na lib (e não no main) para os testes de
/// integração conseguirem atacar a aplicação inteira via `oneshot`.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/products/",
            post(handlers::products::create_product).get(handlers::products::get_all_products),
        )
        .route(
            "/products/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route(
            "/sales/",
            post(handlers::sales::create_sale).get(handlers::sales::get_all_sales),
        )
        .route("/sales/{id}", delete(handlers::sales::delete_sale))
        .route(
            "/categories/",
            get(handlers::categories::get_all_categories)
                .post(handlers::categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        .route(
            "/brands/",
            get(handlers::brands::get_all_brands).post(handlers::brands::create_brand),
        )
        .route("/brands/{id}", delete(handlers::brands::delete_brand))
        .route(
            "/dashboard/inventory_by_category",
            get(handlers::dashboard::get_inventory_by_category),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(app_state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(docs::ApiDoc::openapi())
}
