pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::InMemoryCategoryRepository;
pub use persistence::CategoryRepositoryImpl;
