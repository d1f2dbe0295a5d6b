// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Products ---
        handlers::products::create_product,
        handlers::products::get_all_products,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Sales ---
        handlers::sales::create_sale,
        handlers::sales::get_all_sales,
        handlers::sales::delete_sale,

        // --- Categories ---
        handlers::categories::get_all_categories,
        handlers::categories::create_category,
        handlers::categories::update_category,
        handlers::categories::delete_category,

        // --- Brands ---
        handlers::brands::get_all_brands,
        handlers::brands::create_brand,
        handlers::brands::delete_brand,

        // --- Dashboard ---
        handlers::dashboard::get_inventory_by_category,
    ),
    components(
        schemas(
            models::product::Product,
            models::sale::Sale,
            models::category::Category,
            models::category::Brand,
            models::dashboard::InventoryByCategoryEntry,

            // --- Payloads ---
            handlers::products::CreateProductPayload,
            handlers::products::UpdateProductPayload,
            handlers::sales::CreateSalePayload,
            handlers::categories::CreateCategoryPayload,
            handlers::categories::UpdateCategoryPayload,
            handlers::brands::CreateBrandPayload,
        )
    ),
    tags(
        (name = "Products", description = "Catálogo de produtos"),
        (name = "Sales", description = "Ledger de vendas (único escritor de estoque)"),
        (name = "Categories", description = "Registro canônico de categorias"),
        (name = "Brands", description = "Lista de marcas"),
        (name = "Dashboard", description = "Rollup de estoque por categoria")
    )
)]
pub struct ApiDoc;
