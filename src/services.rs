pub mod catalog_service;
pub use catalog_service::{CatalogService, ProductChanges};
pub mod sale_service;
pub use sale_service::SaleService;
pub mod category_service;
pub use category_service::{CategoryChanges, CategoryService};
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod reconciliation;
pub use reconciliation::{ReconciliationJob, ReconciliationReport};
