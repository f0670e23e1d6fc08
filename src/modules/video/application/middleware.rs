use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::video::application::service::{VideoService, VideoServiceImpl};
use crate::modules::video::domain::{NewVideo, Rating, Video, VideoPatch, VideoRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Validation middleware for the video service.
///
/// Enforces the parameter-level contract (blank ids and titles, empty-patch
/// no-op, rating membership, duration sign) in front of the delegate, so
/// the public behavior holds regardless of how the inner service evolves.
pub struct ValidatingVideoService {
    inner: Arc<dyn VideoService>,
}

impl ValidatingVideoService {
    pub fn new(inner: Arc<dyn VideoService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl VideoService for ValidatingVideoService {
    async fn create(&self, input: NewVideo) -> AppResult<Video> {
        if input.is_empty() {
            return Err(AppError::CouldNotBeEmpty("video".to_string()));
        }
        if let Some(err) = check_all([
            Check::new(
                input.title.is_none(),
                AppError::IsRequired("Title".to_string()),
            ),
            Check::new(
                input.title.as_deref().map(is_blank).unwrap_or(false),
                AppError::CouldNotBeEmpty("video title".to_string()),
            ),
            Check::new(
                input.year_launched.is_none(),
                AppError::IsRequired("YearLaunched".to_string()),
            ),
            Check::new(
                input.rating.is_none(),
                AppError::IsRequired("Rating".to_string()),
            ),
        ]) {
            return Err(err);
        }
        Rating::try_from(input.rating.unwrap_or_default())?;
        if let Some(err) = check_all([
            Check::new(
                input.duration.is_none(),
                AppError::IsRequired("Duration".to_string()),
            ),
            Check::new(
                input.duration.unwrap_or_default() < 0,
                AppError::IsNotValidated("video duration".to_string()),
            ),
        ]) {
            return Err(err);
        }
        self.inner.create(input).await
    }

    async fn list(&self) -> AppResult<Vec<Video>> {
        self.inner.list().await
    }

    async fn show(&self, id: &str) -> AppResult<Video> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("video id".to_string()));
        }
        self.inner.show(id).await
    }

    async fn update(&self, id: &str, patch: VideoPatch) -> AppResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("video id".to_string()));
        }
        if patch.title.as_deref().map(is_blank).unwrap_or(false) {
            return Err(AppError::CouldNotBeEmpty("video title".to_string()));
        }
        if let Some(tag) = patch.rating {
            Rating::try_from(tag)?;
        }
        if patch.duration.map(|d| d < 0).unwrap_or(false) {
            return Err(AppError::IsNotValidated("video duration".to_string()));
        }
        if patch.categories.as_deref().map(|ids| ids.is_empty()).unwrap_or(false) {
            return Err(AppError::IsRequired("Categories".to_string()));
        }
        if patch.genres.as_deref().map(|ids| ids.is_empty()).unwrap_or(false) {
            return Err(AppError::IsRequired("Genres".to_string()));
        }
        self.inner.update(id, patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("video id".to_string()));
        }
        self.inner.destroy(id).await
    }
}

/// Logging middleware for the video service.
///
/// Emits one structured record per failed call and stays silent on success.
/// Results pass through untouched.
pub struct LoggingVideoService {
    inner: Arc<dyn VideoService>,
}

impl LoggingVideoService {
    pub fn new(inner: Arc<dyn VideoService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl VideoService for LoggingVideoService {
    async fn create(&self, input: NewVideo) -> AppResult<Video> {
        let result = self.inner.create(input.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "video.create",
                input = ?input,
                kind = ?err.kind(),
                error = %err,
                "video service call failed"
            );
        }
        result
    }

    async fn list(&self) -> AppResult<Vec<Video>> {
        let result = self.inner.list().await;
        if let Err(err) = &result {
            tracing::error!(
                method = "video.list",
                kind = ?err.kind(),
                error = %err,
                "video service call failed"
            );
        }
        result
    }

    async fn show(&self, id: &str) -> AppResult<Video> {
        let result = self.inner.show(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "video.show",
                id,
                kind = ?err.kind(),
                error = %err,
                "video service call failed"
            );
        }
        result
    }

    async fn update(&self, id: &str, patch: VideoPatch) -> AppResult<()> {
        let result = self.inner.update(id, patch.clone()).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "video.update",
                id,
                patch = ?patch,
                kind = ?err.kind(),
                error = %err,
                "video service call failed"
            );
        }
        result
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        let result = self.inner.destroy(id).await;
        if let Err(err) = &result {
            tracing::error!(
                method = "video.destroy",
                id,
                kind = ?err.kind(),
                error = %err,
                "video service call failed"
            );
        }
        result
    }
}

/// Compose the video service chain: logging over validation over the plain
/// service. Built once at startup by the composition root.
pub fn build_video_service(
    repository: Arc<dyn VideoRepository>,
    ids: Arc<dyn IdGenerator>,
) -> Arc<dyn VideoService> {
    let service = Arc::new(VideoServiceImpl::new(repository, ids));
    let validated = Arc::new(ValidatingVideoService::new(service));
    Arc::new(LoggingVideoService::new(validated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingService {
        create_calls: Mutex<usize>,
        update_calls: Mutex<usize>,
    }

    fn sample(id: &str, title: &str) -> AppResult<Video> {
        Video::new(
            id,
            title,
            "",
            2000,
            false,
            Rating::Free,
            100,
            vec!["c1".to_string()],
            vec!["g1".to_string()],
        )
    }

    #[async_trait]
    impl VideoService for CountingService {
        async fn create(&self, input: NewVideo) -> AppResult<Video> {
            *self.create_calls.lock().unwrap() += 1;
            sample("v1", &input.title.unwrap_or_default())
        }

        async fn list(&self) -> AppResult<Vec<Video>> {
            Ok(vec![])
        }

        async fn show(&self, id: &str) -> AppResult<Video> {
            sample(id, "x")
        }

        async fn update(&self, _id: &str, _patch: VideoPatch) -> AppResult<()> {
            *self.update_calls.lock().unwrap() += 1;
            Ok(())
        }

        async fn destroy(&self, _id: &str) -> AppResult<()> {
            Ok(())
        }
    }

    fn valid_input() -> NewVideo {
        NewVideo {
            title: Some("Ran".to_string()),
            year_launched: Some(1985),
            rating: Some(5),
            duration: Some(162),
            categories: vec!["c1".to_string()],
            genres: vec!["g1".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn validation_blocks_bad_rating_before_the_delegate() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingVideoService::new(inner.clone());

        let err = middleware
            .create(NewVideo {
                rating: Some(99),
                ..valid_input()
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
        assert_eq!(*inner.create_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn title_check_precedes_rating_check() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingVideoService::new(inner.clone());

        let err = middleware
            .create(NewVideo {
                title: None,
                rating: Some(99),
                ..valid_input()
            })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::IsRequired("Title".to_string()));
    }

    #[tokio::test]
    async fn validation_blocks_empty_reference_sets_before_the_delegate() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingVideoService::new(inner.clone());

        let err = middleware
            .update(
                "v1",
                VideoPatch {
                    categories: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, AppError::IsRequired("Categories".to_string()));

        let err = middleware
            .update(
                "v1",
                VideoPatch {
                    genres: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, AppError::IsRequired("Genres".to_string()));
        assert_eq!(*inner.update_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn validation_short_circuits_empty_patch() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingVideoService::new(inner.clone());

        middleware.update("any", VideoPatch::default()).await.unwrap();
        assert_eq!(*inner.update_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn validation_passes_valid_input_through() {
        let inner = Arc::new(CountingService::default());
        let middleware = ValidatingVideoService::new(inner.clone());

        let created = middleware.create(valid_input()).await.unwrap();
        assert_eq!(created.title, "Ran");
        assert_eq!(*inner.create_calls.lock().unwrap(), 1);
    }
}
