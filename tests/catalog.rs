// Testes do catálogo: partial update tipado e exclusão incondicional.

mod common;

use pos_backend::common::error::AppError;
use pos_backend::services::ProductChanges;

use crate::common::{fetch_product, seed_product, test_state};

#[tokio::test]
async fn update_touches_only_supplied_fields() {
    let state = test_state().await;
    let product = seed_product(&state, "Panasonic 18\"", "FAN-018", "Fan", 1200.0, 6).await;

    let updated = state
        .catalog_service
        .update_product(
            &state.db_pool,
            product.id,
            ProductChanges { price: Some(990.0), ..Default::default() },
        )
        .await
        .expect("update deveria passar");

    // Só o preço muda; o resto permanece como criado.
    assert_eq!(updated.price, 990.0);
    assert_eq!(updated.name, "Panasonic 18\"");
    assert_eq!(updated.sku, "FAN-018");
    assert_eq!(updated.category, "Fan");
    assert_eq!(updated.stock, 6);
    assert!(!updated.has_vat);
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let state = test_state().await;

    let err = state
        .catalog_service
        .update_product(&state.db_pool, 77, ProductChanges::default())
        .await
        .expect_err("produto inexistente");
    assert!(matches!(err, AppError::ProductNotFound));
}

#[tokio::test]
async fn delete_missing_product_is_not_found() {
    let state = test_state().await;

    let err = state
        .catalog_service
        .delete_product(&state.db_pool, 77)
        .await
        .expect_err("produto inexistente");
    assert!(matches!(err, AppError::ProductNotFound));
}

// Comportamento herdado do sistema em produção: a criação direta aceita
// estoque negativo (ajuste manual de inventário). Só a rota de venda
// garante saldo não-negativo.
#[tokio::test]
async fn direct_create_accepts_negative_stock() {
    let state = test_state().await;

    let product = state
        .catalog_service
        .create_product(&state.db_pool, "Ajuste", "ADJ-001", "Fan", 0.0, 0.0, -3, false, None)
        .await
        .expect("criação com estoque negativo é aceita");
    assert_eq!(product.stock, -3);

    // E a venda desse produto é recusada, sem tocar no saldo.
    let err = state
        .sale_service
        .create_sale(&state.db_pool, product.id, 1, None)
        .await
        .expect_err("saldo negativo nunca cobre uma venda");
    assert!(matches!(err, AppError::InsufficientStock));
    assert_eq!(fetch_product(&state, product.id).await.stock, -3);
}
