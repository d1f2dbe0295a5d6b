// src/services/dashboard_service.rs

use sqlx::{Executor, Sqlite};

use crate::{
    common::error::AppError, db::DashboardRepository, models::InventoryByCategoryEntry,
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn inventory_by_category<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<InventoryByCategoryEntry>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        self.repo.inventory_by_category(executor).await
    }
}
