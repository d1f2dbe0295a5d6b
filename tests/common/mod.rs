// Infra compartilhada dos testes de integração: pool SQLite em memória
// (uma conexão só — cada conexão :memory: é um banco separado) com as
// migrações embutidas aplicadas.
#![allow(dead_code)]

use pos_backend::config::AppState;
use pos_backend::models::Product;
use sqlx::sqlite::SqlitePoolOptions;

pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool em memória");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("migrações de teste");

    AppState::from_pool(pool)
}

pub async fn seed_product(
    state: &AppState,
    name: &str,
    sku: &str,
    category: &str,
    price: f64,
    stock: i64,
) -> Product {
    state
        .catalog_service
        .create_product(
            &state.db_pool,
            name,
            sku,
            category,
            price,
            price / 2.0,
            stock,
            false,
            None,
        )
        .await
        .expect("seed de produto")
}

pub async fn fetch_product(state: &AppState, id: i64) -> Product {
    state
        .catalog_service
        .get_all_products(&state.db_pool)
        .await
        .expect("listar produtos")
        .into_iter()
        .find(|p| p.id == id)
        .expect("produto existente")
}
