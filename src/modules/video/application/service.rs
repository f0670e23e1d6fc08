use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::video::domain::{NewVideo, Rating, Video, VideoPatch, VideoRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::identifier::IdGenerator;
use crate::shared::validation::{check_all, is_blank, Check};

/// Uniform service contract for videos. The public handle is the outermost
/// middleware built by
/// [`build_video_service`](super::middleware::build_video_service).
#[async_trait]
pub trait VideoService: Send + Sync {
    async fn create(&self, input: NewVideo) -> AppResult<Video>;
    async fn list(&self) -> AppResult<Vec<Video>>;
    async fn show(&self, id: &str) -> AppResult<Video>;
    async fn update(&self, id: &str, patch: VideoPatch) -> AppResult<()>;
    async fn destroy(&self, id: &str) -> AppResult<()>;
}

/// Plain video service: validates, generates ids, talks to the repository.
/// Category and genre references are resolved by the repository, not here;
/// an absent reference surfaces as `NotFound` unchanged.
pub struct VideoServiceImpl {
    repository: Arc<dyn VideoRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl VideoServiceImpl {
    pub fn new(repository: Arc<dyn VideoRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    fn check_new(input: &NewVideo) -> AppResult<Rating> {
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

        let rating = Rating::try_from(input.rating.unwrap_or_default())?;

        if let Some(err) = check_all([
            Check::new(
                input.duration.is_none(),
                AppError::IsRequired("Duration".to_string()),
            ),
            Check::new(
                input.duration.unwrap_or_default() < 0,
                AppError::IsNotValidated("video duration".to_string()),
            ),
            Check::new(
                input.categories.is_empty(),
                AppError::IsRequired("Categories".to_string()),
            ),
            Check::new(
                input.genres.is_empty(),
                AppError::IsRequired("Genres".to_string()),
            ),
        ]) {
            return Err(err);
        }

        Ok(rating)
    }

    fn check_patch(patch: &VideoPatch) -> AppResult<()> {
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
        Ok(())
    }
}

#[async_trait]
impl VideoService for VideoServiceImpl {
    async fn create(&self, input: NewVideo) -> AppResult<Video> {
        if input.is_empty() {
            return Err(AppError::CouldNotBeEmpty("video".to_string()));
        }
        let rating = Self::check_new(&input)?;

        let id = self.ids.generate()?;
        let video = Video::new(
            id,
            input.title.unwrap_or_default(),
            input.description.unwrap_or_default(),
            input.year_launched.unwrap_or_default(),
            input.opened.unwrap_or_default(),
            rating,
            input.duration.unwrap_or_default(),
            input.categories,
            input.genres,
        )?
        .with_file(input.video_file);

        self.repository.store(video).await
    }

    async fn list(&self) -> AppResult<Vec<Video>> {
        self.repository.get_all().await
    }

    async fn show(&self, id: &str) -> AppResult<Video> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("video id".to_string()));
        }
        self.repository.get_one(id.trim()).await
    }

    async fn update(&self, id: &str, patch: VideoPatch) -> AppResult<()> {
        // Empty-patch no-op precedes id validation on purpose.
        if patch.is_empty() {
            return Ok(());
        }
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("video id".to_string()));
        }
        Self::check_patch(&patch)?;
        self.repository.update_one(id.trim(), patch).await
    }

    async fn destroy(&self, id: &str) -> AppResult<()> {
        if is_blank(id) {
            return Err(AppError::CouldNotBeEmpty("video id".to_string()));
        }
        self.repository.delete_one(id.trim()).await
    }
}
