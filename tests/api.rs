// Testes de contrato HTTP: atacam o Router inteiro via `oneshot` e fixam
// os status e os corpos de erro ({"kind", "error"}) que o frontend observa.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{seed_product, test_state};

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn product_crud_roundtrip() {
    let state = test_state().await;
    let app = pos_backend::app(state);

    let (status, created) = send(
        &app,
        Method::POST,
        "/products/",
        Some(json!({
            "name": "Samsung 55\"",
            "sku": "TV-055",
            "category": "Tv",
            "price": 12000.0,
            "cost_price": 9000.0,
            "stock": 10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Samsung 55\"");
    assert_eq!(created["has_vat"], false);
    let id = created["id"].as_i64().expect("id numérico");

    let (status, list) = send(&app, Method::GET, "/products/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    // Update parcial: só o preço no corpo, o resto fica.
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/products/{id}"),
        Some(json!({ "price": 11500.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 11500.0);
    assert_eq!(updated["sku"], "TV-055");

    let (status, body) = send(&app, Method::DELETE, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = send(&app, Method::DELETE, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn create_product_without_stock_is_unprocessable() {
    let state = test_state().await;
    let app = pos_backend::app(state);

    let (status, body) = send(
        &app,
        Method::POST,
        "/products/",
        Some(json!({
            "name": "Sem estoque",
            "sku": "X-001",
            "category": "Fan",
            "price": 100.0,
            "cost_price": 80.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "validation_error");
    assert_eq!(body["details"]["stock"][0], "stock is required");
}

#[tokio::test]
async fn sale_endpoint_maps_the_error_taxonomy() {
    let state = test_state().await;
    let product = seed_product(&state, "LG Inverter", "FR-200", "Refrigerator", 15000.0, 10).await;
    let app = pos_backend::app(state);

    // Produto inexistente: 404 antes de qualquer checagem de estoque.
    let (status, body) = send(
        &app,
        Method::POST,
        "/sales/",
        Some(json!({ "product_id": 999, "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    // Estoque insuficiente: 400 com kind dedicado.
    let (status, body) = send(
        &app,
        Method::POST,
        "/sales/",
        Some(json!({ "product_id": product.id, "quantity": 15 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "insufficient_stock");
    assert_eq!(body["error"], "Not enough stock");

    // Quantidade não-positiva: 422 do validador.
    let (status, body) = send(
        &app,
        Method::POST,
        "/sales/",
        Some(json!({ "product_id": product.id, "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "validation_error");

    // O caminho feliz continua aberto depois dos erros.
    let (status, sale) = send(
        &app,
        Method::POST,
        "/sales/",
        Some(json!({ "product_id": product.id, "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sale["product_name"], "LG Inverter");
    assert_eq!(sale["total_price"], 30000.0);

    let sale_id = sale["id"].as_i64().unwrap();
    let (status, body) = send(&app, Method::DELETE, &format!("/sales/{sale_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn duplicate_category_is_bad_request() {
    let state = test_state().await;
    let app = pos_backend::app(state);

    let (status, created) = send(
        &app,
        Method::POST,
        "/categories/",
        Some(json!({ "name": "Tv", "thai": "โทรทัศน์" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&app, Method::POST, "/categories/", Some(json!({ "name": "Tv" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "conflict");
    assert_eq!(body["error"], "Category 'Tv' already exists");

    let id = created["id"].as_i64().unwrap();
    let (status, body) = send(&app, Method::DELETE, &format!("/categories/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "deleted_id": id }));
}

#[tokio::test]
async fn brand_routes_follow_the_same_contract() {
    let state = test_state().await;
    let app = pos_backend::app(state);

    let (status, brand) =
        send(&app, Method::POST, "/brands/", Some(json!({ "name": "Samsung" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(brand["name"], "Samsung");

    let (status, body) =
        send(&app, Method::POST, "/brands/", Some(json!({ "name": "Samsung" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "conflict");

    let id = brand["id"].as_i64().unwrap();
    let (status, body) = send(&app, Method::DELETE, &format!("/brands/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "deleted_id": id }));

    let (status, body) = send(&app, Method::DELETE, &format!("/brands/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Brand not found");
}

#[tokio::test]
async fn dashboard_rolls_up_inventory_by_category() {
    let state = test_state().await;
    seed_product(&state, "Samsung 55\"", "TV-055", "Tv", 12000.0, 10).await;
    seed_product(&state, "Sharp 32\"", "TV-032", "Tv", 5000.0, 4).await;
    seed_product(&state, "Hatari 16\"", "FAN-016", "Fan", 900.0, 20).await;
    let app = pos_backend::app(state);

    let (status, body) =
        send(&app, Method::GET, "/dashboard/inventory_by_category", None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().expect("lista de entradas");
    assert_eq!(entries.len(), 2);

    // Ordenado por categoria, ASC.
    assert_eq!(entries[0]["category"], "Fan");
    assert_eq!(entries[0]["product_count"], 1);
    assert_eq!(entries[0]["total_stock"], 20);
    assert_eq!(entries[0]["total_value"], 18000.0);

    assert_eq!(entries[1]["category"], "Tv");
    assert_eq!(entries[1]["product_count"], 2);
    assert_eq!(entries[1]["total_stock"], 14);
    assert_eq!(entries[1]["total_value"], 140000.0);
}

#[tokio::test]
async fn state_carries_the_default_bind_addr() {
    let state = test_state().await;
    // Sem BIND_ADDR no ambiente, o estado fica com o endereço padrão —
    // é dele que o main tira onde escutar.
    assert_eq!(state.bind_addr, "0.0.0.0:8000");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let state = test_state().await;
    let app = pos_backend::app(state);

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/products/"].is_object());
    assert!(body["paths"]["/dashboard/inventory_by_category"].is_object());
}
