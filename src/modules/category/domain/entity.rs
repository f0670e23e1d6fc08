use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{check_all, Check};

/// A category of the catalog. Names are trimmed and lower-cased before
/// storage so lookups and uniqueness checks are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "genres_id")]
    pub genres: Vec<String>,
    pub is_validated: bool,
}

impl Category {
    /// Create a category, enforcing the construction invariants: id and name
    /// must be non-empty after trimming, and the name is lower-cased.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> AppResult<Self> {
        let id = id.into().trim().to_string();
        let name = name.into().trim().to_lowercase();

        if let Some(err) = check_all([
            Check::new(
                id.is_empty(),
                AppError::CouldNotBeEmpty("category id".to_string()),
            ),
            Check::new(
                name.is_empty(),
                AppError::CouldNotBeEmpty("category name".to_string()),
            ),
        ]) {
            return Err(err);
        }

        Ok(Self {
            id,
            name,
            description,
            genres: Vec::new(),
            is_validated: false,
        })
    }

    /// Set the referenced genre ids.
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Overwrite the attributes present in the patch; absent fields are
    /// preserved. Name normalization matches the constructor.
    pub fn apply_patch(&mut self, patch: &CategoryPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_lowercase();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(genres) = &patch.genres {
            self.genres = genres.clone();
        }
        if let Some(is_validated) = patch.is_validated {
            self.is_validated = is_validated;
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Construction descriptor for [`Category`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "genres_id", default)]
    pub genres: Vec<String>,
}

impl NewCategory {
    /// True when every field is at its zero value.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.genres.is_empty()
    }
}

/// Update descriptor for [`Category`]: only present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "genres_id")]
    pub genres: Option<Vec<String>>,
    pub is_validated: Option<bool>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.genres.is_none()
            && self.is_validated.is_none()
    }
}
