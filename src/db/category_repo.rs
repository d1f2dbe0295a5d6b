// src/db/category_repo.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError,
    models::{Brand, Category},
};

#[derive(Clone, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }

    // ---
    // Categorias
    // ---

    pub async fn get_all<'e, E>(&self, executor: E) -> Result<Vec<Category>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, thai, image FROM category ORDER BY id ASC",
        )
        .fetch_all(executor)
        .await?;
        Ok(categories)
    }

    pub async fn get_by_id<'e, E>(
        &self,
        executor: E,
        id: i64,
    ) -> Result<Option<Category>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, thai, image FROM category WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(category)
    }

    /// Busca por igualdade exata de nome (o check de conflito do create).
    pub async fn find_by_name<'e, E>(
        &self,
        executor: E,
        name: &str,
    ) -> Result<Option<Category>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, thai, image FROM category WHERE name = ?1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(executor)
        .await?;
        Ok(category)
    }

    /// Busca case-insensitive — usada só pela reconciliação. Com duplicatas
    /// ainda não mescladas, a de menor id é a canônica.
    pub async fn find_by_name_ci<'e, E>(
        &self,
        executor: E,
        name: &str,
    ) -> Result<Option<Category>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, thai, image FROM category
             WHERE LOWER(name) = LOWER(?1) ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(executor)
        .await?;
        Ok(category)
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        name: &str,
        thai: Option<&str>,
        image: Option<&str>,
    ) -> Result<Category, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO category (name, thai, image)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, thai, image
            "#,
        )
        .bind(name)
        .bind(thai)
        .bind(image)
        .fetch_one(executor)
        .await?;
        Ok(category)
    }

    pub async fn update_full<'e, E>(
        &self,
        executor: E,
        category: &Category,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result =
            sqlx::query("UPDATE category SET name = ?1, thai = ?2, image = ?3 WHERE id = ?4")
                .bind(&category.name)
                .bind(&category.thai)
                .bind(&category.image)
                .bind(category.id)
                .execute(executor)
                .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM category WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    // ---
    // Marcas (lista independente, sem relação com produtos)
    // ---

    pub async fn get_all_brands<'e, E>(&self, executor: E) -> Result<Vec<Brand>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let brands = sqlx::query_as::<_, Brand>("SELECT id, name FROM brand ORDER BY id ASC")
            .fetch_all(executor)
            .await?;
        Ok(brands)
    }

    pub async fn find_brand_by_name<'e, E>(
        &self,
        executor: E,
        name: &str,
    ) -> Result<Option<Brand>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let brand =
            sqlx::query_as::<_, Brand>("SELECT id, name FROM brand WHERE name = ?1 LIMIT 1")
                .bind(name)
                .fetch_optional(executor)
                .await?;
        Ok(brand)
    }

    pub async fn insert_brand<'e, E>(&self, executor: E, name: &str) -> Result<Brand, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let brand = sqlx::query_as::<_, Brand>(
            "INSERT INTO brand (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(executor)
        .await?;
        Ok(brand)
    }

    pub async fn delete_brand<'e, E>(&self, executor: E, id: i64) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM brand WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
