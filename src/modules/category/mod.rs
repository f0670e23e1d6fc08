pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::middleware::build_category_service;
pub use application::service::{CategoryService, CategoryServiceImpl};
pub use domain::{Category, CategoryPatch, CategoryRepository, NewCategory};
