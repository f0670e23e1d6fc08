use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::category::domain::{Category, CategoryPatch, CategoryRepository, NewCategory};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Uniform service contract for categories. The public handle is the
/// outermost middleware built by
/// [`build_category_service`](super::middleware::build_category_service).
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create(&self, input: NewCategory) -> AppResult<Category>;
    async fn list(&self) -> AppResult<Vec<Category>>;
    async fn show(&self, id: &str) -> AppResult<Category>;
    async fn update(&self, id: &str, patch: CategoryPatch) -> AppResult<()>;
    async fn destroy(&self, id: &str) -> AppResult<()>;
}

/// Plain category service: validates, generates ids, talks to the repository.
pub struct CategoryServiceImpl {
    repository: Arc<dyn CategoryRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl CategoryServiceImpl {
    pub fn new(repository: Arc<dyn CategoryRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn create(&self, input: NewCategory) -> AppResult<Category> {
        if input.is_empty() {
            return Err(AppError::CouldNotBeEmpty("category".to_string()));
        }
        if let Some(err) = check_all([
            Check::new(input.name.is_none(), AppError::IsRequired("Name".to_string())),
            Check::new(
                input.name.as_deref().map(is_blank).unwrap_or(false),
                AppError::CouldNotBeEmpty("category name".to_string()),
            ),
        ]) {
            return Err(err);
        }

        let id = self.ids.generate()?;
        let category = Category::new(id, input.name.unwrap_or_default(), input.description)?
            .with_genres(input.genres);

        self.repository.store(category).await
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.get_all().await
    }

    async fn show(&self, id: &str) -> AppResult<Category> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("category id".to_string()));
        }
        self.repository.get_one(id.trim()).await
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> AppResult<()> {
        // Empty-patch no-op precedes id validation on purpose.
        if patch.is_empty() {
            return Ok(());
        }
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("category id".to_string()));
        }
        if let Some(err) = check_all([Check::new(
            patch.name.as_deref().map(is_blank).unwrap_or(false),
            AppError::CouldNotBeEmpty("category name".to_string()),
        )]) {
            return Err(err);
        }
        self.repository.update_one(id.trim(), patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("category id".to_string()));
        }
        self.repository.delete_one(id.trim()).await
    }
}
