use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::cast_member::domain::{
    CastKind, CastMember, CastMemberPatch, CastMemberRepository, NewCastMember,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Uniform service contract for cast members.
#[async_trait]
pub trait CastMemberService: Send + Sync {
    async fn create(&self, input: NewCastMember) -> AppResult<CastMember>;
    async fn list(&self) -> AppResult<Vec<CastMember>>;
    async fn show(&self, id: &str) -> AppResult<CastMember>;
    async fn update(&self, id: &str, patch: CastMemberPatch) -> AppResult<()>;
    async fn destroy(&self, id: &str) -> AppResult<()>;
}

/// Plain cast member service.
pub struct CastMemberServiceImpl {
    repository: Arc<dyn CastMemberRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl CastMemberServiceImpl {
    pub fn new(repository: Arc<dyn CastMemberRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }
}

#[async_trait]
impl CastMemberService for CastMemberServiceImpl {
    async fn create(&self, input: NewCastMember) -> AppResult<CastMember> {
        if input.is_empty() {
            return Err(AppError::CouldNotBeEmpty("cast member".to_string()));
        }
        if let Some(err) = check_all([
            Check::new(input.name.is_none(), AppError::IsRequired("Name".to_string())),
            Check::new(
                input.name.as_deref().map(is_blank).unwrap_or(false),
                AppError::CouldNotBeEmpty("cast member name".to_string()),
            ),
            Check::new(input.kind.is_none(), AppError::IsRequired("Type".to_string())),
        ]) {
            return Err(err);
        }

        // Membership check: anything outside {1, 2} is not validated.
        let kind = CastKind::try_from(input.kind.unwrap_or_default())?;

        let id = self.ids.generate()?;
        let member = CastMember::new(id, input.name.unwrap_or_default(), kind)?;

        self.repository.store(member).await
    }

    async fn list(&self) -> AppResult<Vec<CastMember>> {
        self.repository.get_all().await
    }

    async fn show(&self, id: &str) -> AppResult<CastMember> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("cast member id".to_string()));
        }
        self.repository.get_one(id.trim()).await
    }

    async fn update(&self, id: &str, patch: CastMemberPatch) -> AppResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("cast member id".to_string()));
        }
        if let Some(err) = check_all([
            Check::new(
                patch.name.as_deref().map(is_blank).unwrap_or(false),
                AppError::CouldNotBeEmpty("cast member name".to_string()),
            ),
            Check::new(
                patch
                    .kind
                    .map(|tag| CastKind::try_from(tag).is_err())
                    .unwrap_or(false),
                AppError::IsNotValidated("cast member type".to_string()),
            ),
        ]) {
            return Err(err);
        }
        self.repository.update_one(id.trim(), patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("cast member id".to_string()));
        }
        self.repository.delete_one(id.trim()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Repo {}

        #[async_trait]
        impl CastMemberRepository for Repo {
            async fn store(&self, member: CastMember) -> AppResult<CastMember>;
            async fn get_all(&self) -> AppResult<Vec<CastMember>>;
            async fn get_many(&self, ids: &[String]) -> AppResult<Vec<CastMember>>;
            async fn get_one(&self, id: &str) -> AppResult<CastMember>;
            async fn delete_one(&self, id: &str) -> AppResult<()>;
            async fn update_one(&self, id: &str, patch: CastMemberPatch) -> AppResult<()>;
        }
    }

    struct FixedIdGenerator(&'static str);

    impl IdGenerator for FixedIdGenerator {
        fn generate(&self) -> AppResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn service(repo: MockRepo) -> CastMemberServiceImpl {
        CastMemberServiceImpl::new(
            Arc::new(repo),
            Arc::new(FixedIdGenerator("22222222-2222-2222-2222-222222222222")),
        )
    }

    #[tokio::test]
    async fn create_stores_a_director() {
        let mut repo = MockRepo::new();
        repo.expect_store()
            .times(1)
            .returning(|member| Ok(member));

        let created = service(repo)
            .create(NewCastMember {
                name: Some("Akira Kurosawa".to_string()),
                kind: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(created.kind, CastKind::Director);
        assert_eq!(created.id, "22222222-2222-2222-2222-222222222222");
    }

    #[tokio::test]
    async fn create_with_invalid_kind_never_touches_the_repository() {
        let mut repo = MockRepo::new();
        repo.expect_store().times(0);

        let err = service(repo)
            .create(NewCastMember {
                name: Some("Alice".to_string()),
                kind: Some(111),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
        assert!(err.to_string().contains("cast member type"));
    }

    #[tokio::test]
    async fn create_without_kind_is_required() {
        let mut repo = MockRepo::new();
        repo.expect_store().times(0);

        let err = service(repo)
            .create(NewCastMember {
                name: Some("Alice".to_string()),
                kind: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::IsRequired("Type".to_string()));
    }

    #[tokio::test]
    async fn update_validates_present_kind_without_a_repository_call() {
        let mut repo = MockRepo::new();
        repo.expect_update_one().times(0);

        let err = service(repo)
            .update(
                "m1",
                CastMemberPatch {
                    kind: Some(99),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
    }

    #[tokio::test]
    async fn destroy_trims_the_id_before_the_repository_call() {
        let mut repo = MockRepo::new();
        repo.expect_delete_one()
            .with(eq("m1"))
            .times(1)
            .returning(|_| Ok(()));

        service(repo).destroy("  m1  ").await.unwrap();
    }
}
