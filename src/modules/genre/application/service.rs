use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::genre::domain::{Genre, GenrePatch, GenreRepository, NewGenre};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Uniform service contract for genres.
#[async_trait]
pub trait GenreService: Send + Sync {
    async fn create(&self, input: NewGenre) -> AppResult<Genre>;
    async fn list(&self) -> AppResult<Vec<Genre>>;
    async fn show(&self, id: &str) -> AppResult<Genre>;
    async fn update(&self, id: &str, patch: GenrePatch) -> AppResult<()>;
    async fn destroy(&self, id: &str) -> AppResult<()>;
}

/// Plain genre service.
pub struct GenreServiceImpl {
    repository: Arc<dyn GenreRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl GenreServiceImpl {
    pub fn new(repository: Arc<dyn GenreRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }
}

#[async_trait]
impl GenreService for GenreServiceImpl {
    async fn create(&self, input: NewGenre) -> AppResult<Genre> {
        if input.is_empty() {
            return Err(AppError::CouldNotBeEmpty("genre".to_string()));
        }
        if let Some(err) = check_all([
            Check::new(input.name.is_none(), AppError::IsRequired("Name".to_string())),
            Check::new(
                input.name.as_deref().map(is_blank).unwrap_or(false),
                AppError::CouldNotBeEmpty("genre name".to_string()),
            ),
        ]) {
            return Err(err);
        }

        let id = self.ids.generate()?;
        let genre =
            Genre::new(id, input.name.unwrap_or_default())?.with_categories(input.categories);

        self.repository.store(genre).await
    }

    async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.get_all().await
    }

    async fn show(&self, id: &str) -> AppResult<Genre> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("genre id".to_string()));
        }
        self.repository.get_one(id.trim()).await
    }

    async fn update(&self, id: &str, patch: GenrePatch) -> AppResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("genre id".to_string()));
        }
        if patch.name.as_deref().map(is_blank).unwrap_or(false) {
            return Err(AppError::CouldNotBeEmpty("genre name".to_string()));
        }
        self.repository.update_one(id.trim(), patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("genre id".to_string()));
        }
        self.repository.delete_one(id.trim()).await
    }
}
