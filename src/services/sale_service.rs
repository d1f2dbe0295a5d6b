// src/services/sale_service.rs

use chrono::Utc;
use sqlx::{Acquire, Executor, Sqlite};

use crate::{
    common::error::AppError,
    db::{ProductRepository, SaleRepository},
    models::Sale,
};

// O ledger de vendas é o único escritor de product.stock depois que
// existem vendas — é isso que mantém a contabilidade de saldo correta.
#[derive(Clone)]
pub struct SaleService {
    sale_repo: SaleRepository,
    product_repo: ProductRepository,
}

impl SaleService {
    pub fn new(sale_repo: SaleRepository, product_repo: ProductRepository) -> Self {
        Self { sale_repo, product_repo }
    }

    pub async fn get_all_sales<'e, E>(&self, executor: E) -> Result<Vec<Sale>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.sale_repo.get_all(executor).await
    }

    /// Cria a venda e baixa o estoque como uma unidade atômica.
    ///
    /// A baixa é um UPDATE condicional (`stock >= quantity`) com RETURNING,
    /// e é a primeira instrução da transação — nunca um read-then-write.
    /// Vendas concorrentes do mesmo produto enfileiram no write lock e o
    /// efeito líquido é indistinguível de execução serial; o estoque nunca
    /// fica negativo.
    pub async fn create_sale<'e, E>(
        &self,
        executor: E,
        product_id: i64,
        quantity: i64,
        total_price: Option<f64>,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Sqlite> + Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        // 1. Baixa condicional; `None` cobre produto inexistente E saldo
        //    insuficiente — uma leitura simples desempata (404 vs 400).
        //    Nenhuma mutação aconteceu nesse caso (o rollback é só formal).
        let product = match self
            .product_repo
            .try_decrement_stock(&mut *tx, product_id, quantity)
            .await?
        {
            Some(product) => product,
            None => {
                return match self.product_repo.get_by_id(&mut *tx, product_id).await? {
                    None => Err(AppError::ProductNotFound),
                    Some(_) => Err(AppError::InsufficientStock),
                };
            }
        };

        // 2. Snapshot do nome + carimbo do servidor, na mesma transação.
        let total_price = total_price.unwrap_or(product.price * quantity as f64);
        let sale = self
            .sale_repo
            .insert(&mut *tx, product_id, &product.name, quantity, total_price, Utc::now())
            .await?;

        tx.commit().await?;
        Ok(sale)
    }

    /// Exclui a venda estornando o estoque, como uma unidade atômica.
    /// O DELETE com RETURNING abre a transação (escrita primeiro, como em
    /// `create_sale`) e já traz o que o estorno precisa. Se o produto foi
    /// apagado, o estorno é pulado em silêncio: referência pendurada é um
    /// estado tolerado, não um erro.
    pub async fn delete_sale<'e, E>(&self, executor: E, sale_id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite> + Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        let sale = self
            .sale_repo
            .delete(&mut *tx, sale_id)
            .await?
            .ok_or(AppError::SaleNotFound)?;

        // rows_affected == 0 quando o produto não existe mais — ignorado.
        self.product_repo
            .increment_stock(&mut *tx, sale.product_id, sale.quantity)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
