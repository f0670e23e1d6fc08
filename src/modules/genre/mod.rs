pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::middleware::build_genre_service;
pub use application::service::{GenreService, GenreServiceImpl};
pub use domain::{Genre, GenrePatch, GenreRepository, NewGenre};
