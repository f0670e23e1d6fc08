use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::cast_member::application::service::{
    CastMemberService, CastMemberServiceImpl,
};
use crate::modules::cast_member::domain::{
    CastKind, CastMember, CastMemberPatch, CastMemberRepository, NewCastMember,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Validation middleware for the cast member service.
pub struct ValidatingCastMemberService {
    inner: Arc<dyn CastMemberService>,
}

impl ValidatingCastMemberService {
    pub fn new(inner: Arc<dyn CastMemberService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CastMemberService for ValidatingCastMemberService {
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
            Check::new(
                input
                    .kind
                    .map(|tag| CastKind::try_from(tag).is_err())
                    .unwrap_or(false),
                AppError::IsNotValidated("cast member type".to_string()),
            ),
        ]) {
            return Err(err);
        }
        self.inner.create(input).await
    }

    async fn list(&self) -> AppResult<Vec<CastMember>> {
        self.inner.list().await
    }

    async fn show(&self, id: &str) -> AppResult<CastMember> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("cast member id".to_string()));
        }
        self.inner.show(id).await
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
        self.inner.update(id, patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("cast member id".to_string()));
        }
        self.inner.destroy(id).await
    }
}

/// Logging middleware for the cast member service.
pub struct LoggingCastMemberService {
    inner: Arc<dyn CastMemberService>,
}

impl LoggingCastMemberService {
    pub fn new(inner: Arc<dyn CastMemberService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CastMemberService for LoggingCastMemberService {
    async fn create(&self, input: NewCastMember) -> AppResult<CastMember> {
        let result = self.inner.create(input.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "cast_member.create",
                input = ?input,
                kind = ?err.kind(),
                error = %err,
                "cast member service call failed"
            );
        }
        result
    }

    async fn list(&self) -> AppResult<Vec<CastMember>> {
        let result = self.inner.list().await;
        if let Err(err) = &result {
            tracing::error!(
                method = "cast_member.list",
                kind = ?err.kind(),
                error = %err,
                "cast member service call failed"
            );
        }
        result
    }

    async fn show(&self, id: &str) -> AppResult<CastMember> {
        let result = self.inner.show(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "cast_member.show",
                id,
                kind = ?err.kind(),
                error = %err,
                "cast member service call failed"
            );
        }
        result
    }

    async fn update(&self, id: &str, patch: CastMemberPatch) -> AppResult<()> {
        let result = self.inner.update(id, patch.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "cast_member.update",
                id,
                patch = ?patch,
                kind = ?err.kind(),
                error = %err,
                "cast member service call failed"
            );
        }
        result
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        let result = self.inner.destroy(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "cast_member.destroy",
                id,
                kind = ?err.kind(),
                error = %err,
                "cast member service call failed"
            );
        }
        result
    }
}

/// Compose the cast member service chain.
pub fn build_cast_member_service(
    repository: Arc<dyn CastMemberRepository>,
    ids: Arc<dyn IdGenerator>,
) -> Arc<dyn CastMemberService> {
    let service = Arc::new(CastMemberServiceImpl::new(repository, ids));
    let validated = Arc::new(ValidatingCastMemberService::new(service));
    Arc::new(LoggingCastMemberService::new(validated))
}
