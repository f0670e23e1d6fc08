use diesel::prelude::*;

use crate::modules::category::domain::Category;
use crate::schema::{categories, category_genres};

/// Row model for the `categories` table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = categories)]
pub struct CategoryModel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_validated: bool,
}

impl CategoryModel {
    pub fn from_entity(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            is_validated: category.is_validated,
        }
    }

    pub fn into_entity(self, genres: Vec<String>) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
            genres,
            is_validated: self.is_validated,
        }
    }
}

/// Association row linking a category to a genre.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = category_genres)]
pub struct CategoryGenreRow {
    pub category_id: String,
    pub genre_id: String,
}
