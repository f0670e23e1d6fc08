use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::modules::category::domain::{Category, CategoryPatch, CategoryRepository};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed category store used by tests and demos.
///
/// A single readers-writer lock serializes access: writers take it
/// exclusively, readers share it, and the lock spans the whole operation so
/// no partially-updated entity is ever visible.
pub struct InMemoryCategoryRepository {
    entries: RwLock<HashMap<String, Category>>,
}

impl InMemoryCategoryRepository {
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

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<String, Category>>> {
        self.entries
            .read()
            .map_err(|_| AppError::Internal("category store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Category>>> {
        self.entries
            .write()
            .map_err(|_| AppError::Internal("category store lock poisoned".to_string()))
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: Category) -> AppResult<Category> {
        let mut entries = self.write()?;
        // Linear duplicate scan, acceptable at this store's scale.
        if entries.values().any(|c| c.name == category.name) {
            return Err(AppError::AlreadyExists(format!(
                "category '{}'",
                category.name
            )));
        }
        entries.insert(category.id.clone(), category.clone());
        Ok(category)
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let entries = self.read()?;
        let mut ids: Vec<&String> = entries.keys().collect();
        ids.sort();
        Ok(ids
            .into_iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Category>> {
        let entries = self.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<Category> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("category '{}'", id)))
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("category '{}'", id)))
    }

    async fn update_one(&self, id: &str, patch: CategoryPatch) -> AppResult<()> {
        let mut entries = self.write()?;
        if let Some(name) = patch.name.as_deref() {
            let normalized = name.trim().to_lowercase();
            if entries.values().any(|c| c.name == normalized && c.id != id) {
                return Err(AppError::AlreadyExists(format!("category '{}'", normalized)));
            }
        }
        let category = entries
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("category '{}'", id)))?;
        category.apply_patch(&patch);
        Ok(())
    }
}
