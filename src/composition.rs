//! Composition root: wires repositories, the id generator, and the
//! middleware chains into ready-to-use service handles.

use std::sync::Arc;

use crate::modules::cast_member::application::middleware::build_cast_member_service;
use crate::modules::cast_member::application::service::CastMemberService;
use crate::modules::cast_member::infrastructure::{
    CastMemberRepositoryImpl, InMemoryCastMemberRepository,
};
use crate::modules::category::application::middleware::build_category_service;
use crate::modules::category::application::service::CategoryService;
use crate::modules::category::infrastructure::{CategoryRepositoryImpl, InMemoryCategoryRepository};
use crate::modules::genre::application::middleware::build_genre_service;
use crate::modules::genre::application::service::GenreService;
use crate::modules::genre::infrastructure::{GenreRepositoryImpl, InMemoryGenreRepository};
use crate::modules::video::application::middleware::build_video_service;
use crate::modules::video::application::service::VideoService;
use crate::modules::video::infrastructure::{InMemoryVideoRepository, VideoRepositoryImpl};
use crate::shared::errors::AppResult;
use crate::shared::identifier::{IdGenerator, UuidIdGenerator};
use crate::shared::infrastructure::database::Database;

/// The catalog's service handles, one per entity. Each handle is the
/// outermost middleware of its chain; transport adapters hold a `Catalog`
/// and nothing else.
pub struct Catalog {
    pub categories: Arc<dyn CategoryService>,
    pub genres: Arc<dyn GenreService>,
    pub cast_members: Arc<dyn CastMemberService>,
    pub videos: Arc<dyn VideoService>,
}

impl Catalog {
    /// Wire every service over the in-memory stores. The video store shares
    /// the category and genre stores so reference resolution observes the
    /// same data the sibling services write.
    pub fn in_memory() -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);

        let category_repo = Arc::new(InMemoryCategoryRepository::new());
        let genre_repo = Arc::new(InMemoryGenreRepository::new());
        let cast_member_repo = Arc::new(InMemoryCastMemberRepository::new());
        let video_repo = Arc::new(InMemoryVideoRepository::new(
            category_repo.clone(),
            genre_repo.clone(),
        ));

        Self {
            categories: build_category_service(category_repo, ids.clone()),
            genres: build_genre_service(genre_repo, ids.clone()),
            cast_members: build_cast_member_service(cast_member_repo, ids.clone()),
            videos: build_video_service(video_repo, ids),
        }
    }

    /// Wire every service over the PostgreSQL stores backed by `db`'s pool.
    pub fn with_database(db: &Database) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);
        let pool = db.pool().clone();

        Self {
            categories: build_category_service(
                Arc::new(CategoryRepositoryImpl::new(pool.clone())),
                ids.clone(),
            ),
            genres: build_genre_service(
                Arc::new(GenreRepositoryImpl::new(pool.clone())),
                ids.clone(),
            ),
            cast_members: build_cast_member_service(
                Arc::new(CastMemberRepositoryImpl::new(pool.clone())),
                ids.clone(),
            ),
            videos: build_video_service(Arc::new(VideoRepositoryImpl::new(pool)), ids),
        }
    }

    /// Load `.env`, connect to PostgreSQL, and wire the relational catalog.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let db = Database::new()?;
        Ok(Self::with_database(&db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::NewCategory;
    use crate::modules::genre::domain::NewGenre;
    use crate::modules::video::domain::NewVideo;
    use crate::shared::errors::{AppError, ErrorKind};

    #[tokio::test]
    async fn in_memory_catalog_wires_every_service() {
        let catalog = Catalog::in_memory();

        let category = catalog
            .categories
            .create(NewCategory {
                name: Some("Action".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let genre = catalog
            .genres
            .create(NewGenre {
                name: Some("Thriller".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let video = catalog
            .videos
            .create(NewVideo {
                title: Some("Heat".to_string()),
                year_launched: Some(1995),
                rating: Some(5),
                duration: Some(170),
                categories: vec![category.id.clone()],
                genres: vec![genre.id.clone()],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(video.categories, vec![category.id]);
        assert_eq!(catalog.videos.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn video_creation_with_unknown_reference_is_not_found() {
        let catalog = Catalog::in_memory();

        let err = catalog
            .videos
            .create(NewVideo {
                title: Some("Heat".to_string()),
                year_launched: Some(1995),
                rating: Some(5),
                duration: Some(170),
                categories: vec!["nope".to_string()],
                genres: vec!["nah".to_string()],
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err, AppError::NotFound("category 'nope'".to_string()));
        assert!(catalog.videos.list().await.unwrap().is_empty());
    }
}
