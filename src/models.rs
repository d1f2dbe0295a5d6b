pub mod product;
pub use product::Product;
pub mod sale;
pub use sale::Sale;
pub mod category;
pub use category::{Brand, Category};
pub mod dashboard;
pub use dashboard::InventoryByCategoryEntry;
