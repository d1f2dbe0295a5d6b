// src/db/product_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{common::error::AppError, models::Product};

#[derive(Clone, Default)]
pub struct ProductRepository;

impl ProductRepository {
    pub fn new() -> Self {
        Self
    }

    // ---
    // Funções de "Leitura" (Getters)
    // ---

    pub async fn get_all<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, sku, category, price, cost_price, stock, has_vat, image
             FROM product ORDER BY id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(products)
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, sku, category, price, cost_price, stock, has_vat, image
             FROM product WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(product)
    }

    /// Rótulos de categoria distintos e não vazios presentes nos produtos.
    pub async fn distinct_categories<'e, E>(&self, executor: E) -> Result<Vec<String>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let labels = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM product WHERE category <> '' ORDER BY category ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(labels)
    }

    // ---
    // Funções de "Escrita" (Transacionais)
    // ---

    #[allow(clippy::too_many_arguments)]
    pub async fn insert<'e, E>(
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
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO product (name, sku, category, price, cost_price, stock, has_vat, image)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id, name, sku, category, price, cost_price, stock, has_vat, image
            "#,
        )
        .bind(name)
        .bind(sku)
        .bind(category)
        .bind(price)
        .bind(cost_price)
        .bind(stock)
        .bind(has_vat)
        .bind(image)
        .fetch_one(executor)
        .await?;
        Ok(product)
    }

    /// Grava a linha inteira (o merge parcial acontece no service, dentro
    /// da mesma transação da leitura).
    pub async fn update_full<'e, E>(&self, executor: E, product: &Product) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE product
            SET name = ?1, sku = ?2, category = ?3, price = ?4,
                cost_price = ?5, stock = ?6, has_vat = ?7, image = ?8
            WHERE id = ?9
            "#,
        )
        .bind(&product.name)
        .bind(&product.sku)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.cost_price)
        .bind(product.stock)
        .bind(product.has_vat)
        .bind(&product.image)
        .bind(product.id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM product WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Baixa de estoque condicional e atômica: só decrementa se ainda houver
    /// saldo suficiente, e devolve a linha já atualizada (ou `None` quando o
    /// saldo não cobre ou o produto não existe — é o chamador que distingue).
    ///
    /// Precisa ser a PRIMEIRA instrução da transação de venda: abrir pela
    /// escrita toma o write lock na hora, e vendas concorrentes do mesmo
    /// produto enfileiram no busy_timeout em vez de estourar SQLITE_BUSY
    /// no upgrade de lock de uma transação que começou lendo.
    pub async fn try_decrement_stock<'e, E>(
        &self,
        executor: E,
        id: i64,
        quantity: i64,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE product SET stock = stock - ?1
            WHERE id = ?2 AND stock >= ?1
            RETURNING id, name, sku, category, price, cost_price, stock, has_vat, image
            "#,
        )
        .bind(quantity)
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(product)
    }

    /// Estorno de estoque (exclusão de venda). Sem condição: devolver saldo
    /// nunca falha por falta de estoque.
    pub async fn increment_stock<'e, E>(
        &self,
        executor: E,
        id: i64,
        quantity: i64,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE product SET stock = stock + ?1 WHERE id = ?2")
            .bind(quantity)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Cascata de renomeação: reescreve o rótulo de todos os produtos que
    /// apontam para o nome antigo. Retorna quantos foram afetados.
    pub async fn rename_category_label<'e, E>(
        &self,
        executor: E,
        old_name: &str,
        new_name: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE product SET category = ?1 WHERE category = ?2")
            .bind(new_name)
            .bind(old_name)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
