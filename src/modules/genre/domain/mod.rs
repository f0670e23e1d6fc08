pub mod entity;
pub mod repository;

pub use entity::{Genre, GenrePatch, NewGenre};
pub use repository::GenreRepository;
