pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::InMemoryGenreRepository;
pub use persistence::GenreRepositoryImpl;
