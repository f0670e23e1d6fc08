/// Repository trait for video persistence
///
/// Implementations additionally resolve the referenced category and genre
/// ids on `store`; an absent reference fails `NotFound`.
use crate::modules::video::domain::entity::{Video, VideoPatch};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Persist a video. Fails `AlreadyExists` when another video carries
    /// the same title, and `NotFound` when a referenced category or genre
    /// id does not exist.
    async fn store(&self, video: Video) -> AppResult<Video>;

    /// All videos in ascending id order.
    async fn get_all(&self) -> AppResult<Vec<Video>>;

    /// The subset matching `ids`, in the given order; unknown ids are
    /// silently skipped.
    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Video>>;

    /// Fails `NotFound` when absent.
    async fn get_one(&self, id: &str) -> AppResult<Video>;

    /// Hard delete. Fails `NotFound` when absent.
    async fn delete_one(&self, id: &str) -> AppResult<()>;

    /// Apply the patch field by field. Fails `NotFound` when absent.
    async fn update_one(&self, id: &str, patch: VideoPatch) -> AppResult<()>;
}
