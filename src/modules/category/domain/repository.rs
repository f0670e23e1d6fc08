/// Repository trait for category persistence
///
/// Satisfied by the in-memory map store and by the PostgreSQL store; the
/// service layer is agnostic to the choice.
use crate::modules::category::domain::entity::{Category, CategoryPatch};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a category. Fails `AlreadyExists` when another category
    /// carries the same name.
    async fn store(&self, category: Category) -> AppResult<Category>;

    /// All categories in ascending id order.
    async fn get_all(&self) -> AppResult<Vec<Category>>;

    /// The subset matching `ids`, in the given order; unknown ids are
    /// silently skipped.
    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Category>>;

    /// Fails `NotFound` when absent.
    async fn get_one(&self, id: &str) -> AppResult<Category>;

    /// Fails `NotFound` when absent.
    async fn delete_one(&self, id: &str) -> AppResult<()>;

    /// Apply the patch field by field. Fails `NotFound` when absent.
    async fn update_one(&self, id: &str, patch: CategoryPatch) -> AppResult<()>;
}
