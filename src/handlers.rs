pub mod products;
pub mod sales;
pub mod categories;
pub mod brands;
pub mod dashboard;
