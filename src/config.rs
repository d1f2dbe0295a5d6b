// src/config.rs

use std::{env, str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{
    db::{CategoryRepository, DashboardRepository, ProductRepository, SaleRepository},
    services::{
        CatalogService, CategoryService, DashboardService, ReconciliationJob, SaleService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    /// Endereço de escuta do servidor (env `BIND_ADDR`).
    pub bind_addr: String,
    pub catalog_service: CatalogService,
    pub sale_service: SaleService,
    pub category_service: CategoryService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // O banco legado é um arquivo SQLite; create_if_missing cobre a
        // primeira subida em máquina limpa.
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pos.db".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self { bind_addr, ..Self::from_pool(db_pool) })
    }

    /// Monta o gráfico de dependências a partir de uma pool pronta
    /// (os testes de integração entram por aqui).
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let product_repo = ProductRepository::new();
        let category_repo = CategoryRepository::new();

        let catalog_service = CatalogService::new(product_repo.clone());
        let sale_service = SaleService::new(SaleRepository::new(), product_repo.clone());
        let category_service = CategoryService::new(category_repo, product_repo);
        let dashboard_service = DashboardService::new(DashboardRepository::new());

        Self {
            db_pool,
            bind_addr: "0.0.0.0:8000".to_string(),
            catalog_service,
            sale_service,
            category_service,
            dashboard_service,
        }
    }

    /// A rotina de startup é construída à parte: roda uma única vez, antes
    /// do router existir, e não fica no estado compartilhado.
    pub fn reconciliation_job(&self) -> ReconciliationJob {
        ReconciliationJob::new(CategoryRepository::new(), ProductRepository::new())
    }
}
