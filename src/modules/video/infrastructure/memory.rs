use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::modules::category::domain::CategoryRepository;
use crate::modules::genre::domain::GenreRepository;
use crate::modules::video::domain::{Video, VideoPatch, VideoRepository};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed video store behind a single readers-writer lock.
///
/// Category and genre references are resolved against the sibling stores
/// on insert and on link replacement. There is no cross-store transaction;
/// each operation is atomic only with respect to this store's lock.
pub struct InMemoryVideoRepository {
    entries: RwLock<HashMap<String, Video>>,
    categories: Arc<dyn CategoryRepository>,
    genres: Arc<dyn GenreRepository>,
}

impl InMemoryVideoRepository {
    pub fn new(categories: Arc<dyn CategoryRepository>, genres: Arc<dyn GenreRepository>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            categories,
            genres,
        }
    }

    /// Test teardown helper.
    pub fn delete_all(&self) -> AppResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<String, Video>>> {
        self.entries
            .read()
            .map_err(|_| AppError::Internal("video store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Video>>> {
        self.entries
            .write()
            .map_err(|_| AppError::Internal("video store lock poisoned".to_string()))
    }

    async fn check_references(&self, categories: &[String], genres: &[String]) -> AppResult<()> {
        let found = self.categories.get_many(categories).await?;
        if found.len() != categories.len() {
            let missing = categories
                .iter()
                .find(|id| !found.iter().any(|c| &c.id == *id))
                .cloned()
                .unwrap_or_default();
            return Err(AppError::NotFound(format!("category '{}'", missing)));
        }

        let found = self.genres.get_many(genres).await?;
        if found.len() != genres.len() {
            let missing = genres
                .iter()
                .find(|id| !found.iter().any(|g| &g.id == *id))
                .cloned()
                .unwrap_or_default();
            return Err(AppError::NotFound(format!("genre '{}'", missing)));
        }

        Ok(())
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn store(&self, video: Video) -> AppResult<Video> {
        self.check_references(&video.categories, &video.genres)
            .await?;

        let mut entries = self.write()?;
        if entries.values().any(|v| v.title == video.title) {
            return Err(AppError::AlreadyExists(format!("video '{}'", video.title)));
        }
        entries.insert(video.id.clone(), video.clone());
        Ok(video)
    }

    async fn get_all(&self) -> AppResult<Vec<Video>> {
        let entries = self.read()?;
        let mut ids: Vec<&String> = entries.keys().collect();
        ids.sort();
        Ok(ids
            .into_iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Video>> {
        let entries = self.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<Video> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("video '{}'", id)))
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("video '{}'", id)))
    }

    async fn update_one(&self, id: &str, patch: VideoPatch) -> AppResult<()> {
        if let Some(categories) = patch.categories.as_deref() {
            self.check_references(categories, &[]).await?;
        }
        if let Some(genres) = patch.genres.as_deref() {
            self.check_references(&[], genres).await?;
        }

        let mut entries = self.write()?;
        if let Some(title) = patch.title.as_deref() {
            let trimmed = title.trim();
            if entries.values().any(|v| v.title == trimmed && v.id != id) {
                return Err(AppError::AlreadyExists(format!("video '{}'", trimmed)));
            }
        }
        let video = entries
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("video '{}'", id)))?;
        video.apply_patch(&patch)
    }
}
