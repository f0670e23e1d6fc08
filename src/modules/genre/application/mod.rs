pub mod middleware;
pub mod service;

pub use middleware::build_genre_service;
pub use service::{GenreService, GenreServiceImpl};
