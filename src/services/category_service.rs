// src/services/category_service.rs

use sqlx::{Acquire, Executor, Sqlite};

use crate::{
    common::error::AppError,
    db::{CategoryRepository, ProductRepository},
    models::{Brand, Category},
};

/// Partial update tipado para categoria (mesmo contrato do ProductChanges).
#[derive(Debug, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub thai: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone)]
pub struct CategoryService {
    category_repo: CategoryRepository,
    product_repo: ProductRepository,
}

impl CategoryService {
    pub fn new(category_repo: CategoryRepository, product_repo: ProductRepository) -> Self {
        Self { category_repo, product_repo }
    }

    pub async fn get_all_categories<'e, E>(&self, executor: E) -> Result<Vec<Category>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.category_repo.get_all(executor).await
    }

    /// O check de duplicata aqui é por nome EXATO, de propósito: a prevenção
    /// case-insensitive é responsabilidade da reconciliação de startup.
    pub async fn create_category<'e, E>(
        &self,
        executor: E,
        name: &str,
        thai: Option<&str>,
        image: Option<&str>,
    ) -> Result<Category, AppError>
    where
        E: Executor<'e, Database = Sqlite> + Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        if self.category_repo.find_by_name(&mut *tx, name).await?.is_some() {
            return Err(AppError::CategoryNameAlreadyExists(name.to_string()));
        }
        let category = self.category_repo.insert(&mut *tx, name, thai, image).await?;

        tx.commit().await?;
        Ok(category)
    }

    /// Atualização parcial. Se o nome muda, a cascata reescreve o rótulo de
    /// todos os produtos que apontavam para o nome antigo — O(produtos) por
    /// renomeação, commitada junto com a categoria (ninguém enxerga a
    /// categoria renomeada com produtos ainda no rótulo velho).
    pub async fn update_category<'e, E>(
        &self,
        executor: E,
        id: i64,
        changes: CategoryChanges,
    ) -> Result<Category, AppError>
    where
        E: Executor<'e, Database = Sqlite> + Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        let mut category = self
            .category_repo
            .get_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::CategoryNotFound)?;

        if let Some(new_name) = changes.name {
            if new_name != category.name {
                let renamed = self
                    .product_repo
                    .rename_category_label(&mut *tx, &category.name, &new_name)
                    .await?;
                tracing::info!(
                    old = %category.name,
                    new = %new_name,
                    products = renamed,
                    "cascata de renomeação de categoria"
                );
            }
            category.name = new_name;
        }
        if let Some(thai) = changes.thai {
            category.thai = Some(thai);
        }
        if let Some(image) = changes.image {
            category.image = Some(image);
        }

        self.category_repo.update_full(&mut *tx, &category).await?;
        tx.commit().await?;
        Ok(category)
    }

    /// Exclusão incondicional: produtos ainda rotulados com essa categoria
    /// NÃO são tocados. O rótulo órfão fica até a próxima reconciliação —
    /// janela de consistência eventual documentada, não um bug.
    pub async fn delete_category<'e, E>(&self, executor: E, id: i64) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let affected = self.category_repo.delete(executor, id).await?;
        if affected == 0 {
            return Err(AppError::CategoryNotFound);
        }
        Ok(id)
    }

    // ---
    // Marcas
    // ---

    pub async fn get_all_brands<'e, E>(&self, executor: E) -> Result<Vec<Brand>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.category_repo.get_all_brands(executor).await
    }

    pub async fn create_brand<'e, E>(&self, executor: E, name: &str) -> Result<Brand, AppError>
    where
        E: Executor<'e, Database = Sqlite> + Acquire<'e, Database = Sqlite>,
    {
        let mut tx = executor.begin().await?;

        if self.category_repo.find_brand_by_name(&mut *tx, name).await?.is_some() {
            return Err(AppError::BrandNameAlreadyExists(name.to_string()));
        }
        let brand = self.category_repo.insert_brand(&mut *tx, name).await?;

        tx.commit().await?;
        Ok(brand)
    }

    pub async fn delete_brand<'e, E>(&self, executor: E, id: i64) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let affected = self.category_repo.delete_brand(executor, id).await?;
        if affected == 0 {
            return Err(AppError::BrandNotFound);
        }
        Ok(id)
    }
}
