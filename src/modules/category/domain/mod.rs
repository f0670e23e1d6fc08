pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryPatch, NewCategory};
pub use repository::CategoryRepository;
