use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::modules::genre::domain::{Genre, GenrePatch, GenreRepository};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed genre store behind a single readers-writer lock.
pub struct InMemoryGenreRepository {
    entries: RwLock<HashMap<String, Genre>>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Test teardown helper.
    pub fn delete_all(&self) -> AppResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<String, Genre>>> {
        self.entries
            .read()
            .map_err(|_| AppError::Internal("genre store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Genre>>> {
        self.entries
            .write()
            .map_err(|_| AppError::Internal("genre store lock poisoned".to_string()))
    }
}

impl Default for InMemoryGenreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn store(&self, genre: Genre) -> AppResult<Genre> {
        let mut entries = self.write()?;
        if entries.values().any(|g| g.name == genre.name) {
            return Err(AppError::AlreadyExists(format!("genre '{}'", genre.name)));
        }
        entries.insert(genre.id.clone(), genre.clone());
        Ok(genre)
    }

    async fn get_all(&self) -> AppResult<Vec<Genre>> {
        let entries = self.read()?;
        let mut ids: Vec<&String> = entries.keys().collect();
        ids.sort();
        Ok(ids
            .into_iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Genre>> {
        let entries = self.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<Genre> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("genre '{}'", id)))
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("genre '{}'", id)))
    }

    async fn update_one(&self, id: &str, patch: GenrePatch) -> AppResult<()> {
        let mut entries = self.write()?;
        if let Some(name) = patch.name.as_deref() {
            let normalized = name.trim().to_lowercase();
            if entries.values().any(|g| g.name == normalized && g.id != id) {
                return Err(AppError::AlreadyExists(format!("genre '{}'", normalized)));
            }
        }
        let genre = entries
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("genre '{}'", id)))?;
        genre.apply_patch(&patch);
        Ok(())
    }
}
