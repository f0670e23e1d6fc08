/// Repository trait for genre persistence
use crate::modules::genre::domain::entity::{Genre, GenrePatch};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Persist a genre. Fails `AlreadyExists` on a duplicate name.
    async fn store(&self, genre: Genre) -> AppResult<Genre>;

    /// All genres in ascending id order.
    async fn get_all(&self) -> AppResult<Vec<Genre>>;

    /// The subset matching `ids`, in the given order; unknown ids skipped.
    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Genre>>;

    /// Fails `NotFound` when absent.
    async fn get_one(&self, id: &str) -> AppResult<Genre>;

    /// Fails `NotFound` when absent.
    async fn delete_one(&self, id: &str) -> AppResult<()>;

    /// Apply the patch field by field. Fails `NotFound` when absent.
    async fn update_one(&self, id: &str, patch: GenrePatch) -> AppResult<()>;
}
