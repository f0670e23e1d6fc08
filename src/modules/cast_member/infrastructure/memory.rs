use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::modules::cast_member::domain::{CastMember, CastMemberPatch, CastMemberRepository};
use crate::shared::errors::{AppError, AppResult};

/// Map-backed cast member store behind a single readers-writer lock.
pub struct InMemoryCastMemberRepository {
    entries: RwLock<HashMap<String, CastMember>>,
}

impl InMemoryCastMemberRepository {
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

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<String, CastMember>>> {
        self.entries
            .read()
            .map_err(|_| AppError::Internal("cast member store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<String, CastMember>>> {
        self.entries
            .write()
            .map_err(|_| AppError::Internal("cast member store lock poisoned".to_string()))
    }
}

impl Default for InMemoryCastMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CastMemberRepository for InMemoryCastMemberRepository {
    async fn store(&self, member: CastMember) -> AppResult<CastMember> {
        let mut entries = self.write()?;
        if entries.values().any(|m| m.name == member.name) {
            return Err(AppError::AlreadyExists(format!(
                "cast member '{}'",
                member.name
            )));
        }
        entries.insert(member.id.clone(), member.clone());
        Ok(member)
    }

    async fn get_all(&self) -> AppResult<Vec<CastMember>> {
        let entries = self.read()?;
        let mut ids: Vec<&String> = entries.keys().collect();
        ids.sort();
        Ok(ids
            .into_iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<CastMember>> {
        let entries = self.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| entries.get(id).cloned())
            .collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<CastMember> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("cast member '{}'", id)))
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("cast member '{}'", id)))
    }

    async fn update_one(&self, id: &str, patch: CastMemberPatch) -> AppResult<()> {
        let mut entries = self.write()?;
        if let Some(name) = patch.name.as_deref() {
            let trimmed = name.trim();
            if entries.values().any(|m| m.name == trimmed && m.id != id) {
                return Err(AppError::AlreadyExists(format!(
                    "cast member '{}'",
                    trimmed
                )));
            }
        }
        let member = entries
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("cast member '{}'", id)))?;
        member.apply_patch(&patch)
    }
}
