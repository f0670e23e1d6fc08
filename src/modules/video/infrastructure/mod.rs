pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::InMemoryVideoRepository;
pub use persistence::VideoRepositoryImpl;
