pub mod middleware;
pub mod service;

pub use middleware::build_category_service;
pub use service::{CategoryService, CategoryServiceImpl};
