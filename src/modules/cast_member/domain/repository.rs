/// Repository trait for cast member persistence
use crate::modules::cast_member::domain::entity::{CastMember, CastMemberPatch};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait CastMemberRepository: Send + Sync {
    /// Persist a cast member. Fails `AlreadyExists` on a duplicate name.
    async fn store(&self, member: CastMember) -> AppResult<CastMember>;

    /// All cast members in ascending id order.
    async fn get_all(&self) -> AppResult<Vec<CastMember>>;

    /// The subset matching `ids`, in the given order; unknown ids skipped.
    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<CastMember>>;

    /// Fails `NotFound` when absent.
    async fn get_one(&self, id: &str) -> AppResult<CastMember>;

    /// Hard delete. Fails `NotFound` when absent.
    async fn delete_one(&self, id: &str) -> AppResult<()>;

    /// Apply the patch field by field. Fails `NotFound` when absent.
    async fn update_one(&self, id: &str, patch: CastMemberPatch) -> AppResult<()>;
}
