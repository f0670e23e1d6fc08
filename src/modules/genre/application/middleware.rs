use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::genre::application::service::{GenreService, GenreServiceImpl};
use crate::modules::genre::domain::{Genre, GenrePatch, GenreRepository, NewGenre};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Validation middleware for the genre service.
pub struct ValidatingGenreService {
    inner: Arc<dyn GenreService>,
}

impl ValidatingGenreService {
    pub fn new(inner: Arc<dyn GenreService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl GenreService for ValidatingGenreService {
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
        self.inner.create(input).await
    }

    async fn list(&self) -> AppResult<Vec<Genre>> {
        self.inner.list().await
    }

    async fn show(&self, id: &str) -> AppResult<Genre> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("genre id".to_string()));
        }
        self.inner.show(id).await
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
        self.inner.update(id, patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("genre id".to_string()));
        }
        self.inner.destroy(id).await
    }
}

/// Logging middleware for the genre service: one record per failed call.
pub struct LoggingGenreService {
    inner: Arc<dyn GenreService>,
}

impl LoggingGenreService {
    pub fn new(inner: Arc<dyn GenreService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl GenreService for LoggingGenreService {
    async fn create(&self, input: NewGenre) -> AppResult<Genre> {
        let result = self.inner.create(input.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "genre.create",
                input = ?input,
                kind = ?err.kind(),
                error = %err,
                "genre service call failed"
            );
        }
        result
    }

    async fn list(&self) -> AppResult<Vec<Genre>> {
        let result = self.inner.list().await;
        if let Err(err) = &result {
            tracing::error!(
                method = "genre.list",
                kind = ?err.kind(),
                error = %err,
                "genre service call failed"
            );
        }
        result
    }

    async fn show(&self, id: &str) -> AppResult<Genre> {
        let result = self.inner.show(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "genre.show",
                id,
                kind = ?err.kind(),
                error = %err,
                "genre service call failed"
            );
        }
        result
    }

    async fn update(&self, id: &str, patch: GenrePatch) -> AppResult<()> {
        let result = self.inner.update(id, patch.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "genre.update",
                id,
                patch = ?patch,
                kind = ?err.kind(),
                error = %err,
                "genre service call failed"
            );
        }
        result
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        let result = self.inner.destroy(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "genre.destroy",
                id,
                kind = ?err.kind(),
                error = %err,
                "genre service call failed"
            );
        }
        result
    }
}

/// Compose the genre service chain.
pub fn build_genre_service(
    repository: Arc<dyn GenreRepository>,
    ids: Arc<dyn IdGenerator>,
) -> Arc<dyn GenreService> {
    let service = Arc::new(GenreServiceImpl::new(repository, ids));
    let validated = Arc::new(ValidatingGenreService::new(service));
    Arc::new(LoggingGenreService::new(validated))
}
