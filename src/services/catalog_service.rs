// src/services/catalog_service.rs

use sqlx::{Acquire, Executor, Sqlite};

use crate::{common::error::AppError, db::ProductRepository, models::Product};

/// Atualização parcial tipada: cada campo é um Option explícito e só é
/// aplicado quando presente — nunca inferimos "não enviado" de um sentinela.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub cost_price: Option<f64>,
    pub stock: Option<i64>,
    pub has_vat: Option<bool>,
    pub image: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    product_repo: ProductRepository,
}

impl CatalogService {
    pub fn new(product_repo: ProductRepository) -> Self {
        Self { product_repo }
    }

    pub async fn get_all_products<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.product_repo.get_all(executor).await
    }

    // Sem checagem de faixa aqui: estoque/preço negativos são aceitos na
    // criação direta (comportamento herdado — só o caminho de venda garante
    // estoque não-negativo).
    #[allow(clippy::too_many_arguments)]
    pub async fn create_product<'e, E>(
        &self,
        executor: E,
        name: &str,
        sku: &str,
        category: &str,
        price: f64,
        cost_price: f64,
        stock: i64,
        has_vat: bool,
        image: Option<&str>,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.product_repo
            .insert(executor, name, sku, category, price, cost_price, stock, has_vat, image)
            .await
    }

    /// Ler-aplicar-gravar dentro de uma transação: os campos ausentes ficam
    /// intocados (contrato de partial update, não replace).
    pub async fn update_product<'e, E>(
        &self,
        executor: E,
        id: i64,
        changes: ProductChanges,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Sqlite> + Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        let mut product = self
            .product_repo
            .get_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(sku) = changes.sku {
            product.sku = sku;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(cost_price) = changes.cost_price {
            product.cost_price = cost_price;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }
        if let Some(has_vat) = changes.has_vat {
            product.has_vat = has_vat;
        }
        if let Some(image) = changes.image {
            product.image = Some(image);
        }

        self.product_repo.update_full(&mut *tx, &product).await?;
        tx.commit().await?;
        Ok(product)
    }

    /// Exclusão incondicional: vendas históricas que referenciam o produto
    /// ficam penduradas de propósito (ver SaleService::delete_sale).
    pub async fn delete_product<'e, E>(&self, executor: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let affected = self.product_repo.delete(executor, id).await?;
        if affected == 0 {
            return Err(AppError::ProductNotFound);
        }
        Ok(())
    }
}
