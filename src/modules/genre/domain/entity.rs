use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{check_all, Check};

/// A genre of the catalog. As with categories, names are trimmed and
/// lower-cased before storage and comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    #[serde(rename = "categories_id")]
    pub categories: Vec<String>,
    pub is_validated: bool,
}

impl Genre {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> AppResult<Self> {
        let id = id.into().trim().to_string();
        let name = name.into().trim().to_lowercase();

        if let Some(err) = check_all([
            Check::new(
                id.is_empty(),
                AppError::CouldNotBeEmpty("genre id".to_string()),
            ),
            Check::new(
                name.is_empty(),
                AppError::CouldNotBeEmpty("genre name".to_string()),
            ),
        ]) {
            return Err(err);
        }

        Ok(Self {
            id,
            name,
            categories: Vec::new(),
            is_validated: false,
        })
    }

    /// Set the referenced category ids.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Overwrite the attributes present in the patch; absent fields are
    /// preserved.
    pub fn apply_patch(&mut self, patch: &GenrePatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_lowercase();
        }
        if let Some(categories) = &patch.categories {
            self.categories = categories.clone();
        }
        if let Some(is_validated) = patch.is_validated {
            self.is_validated = is_validated;
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Construction descriptor for [`Genre`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGenre {
    pub name: Option<String>,
    #[serde(rename = "categories_id", default)]
    pub categories: Vec<String>,
}

impl NewGenre {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.categories.is_empty()
    }
}

/// Update descriptor for [`Genre`]: only present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenrePatch {
    pub name: Option<String>,
    #[serde(rename = "categories_id")]
    pub categories: Option<Vec<String>>,
    pub is_validated: Option<bool>,
}

impl GenrePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.categories.is_none() && self.is_validated.is_none()
    }
}
