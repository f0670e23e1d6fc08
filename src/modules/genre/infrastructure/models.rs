use diesel::prelude::*;

use crate::modules::genre::domain::Genre;
use crate::schema::{category_genres, genres};

/// Row model for the `genres` table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = genres)]
pub struct GenreModel {
    pub id: String,
    pub name: String,
    pub is_validated: bool,
}

impl GenreModel {
    pub fn from_entity(genre: &Genre) -> Self {
        Self {
            id: genre.id.clone(),
            name: genre.name.clone(),
            is_validated: genre.is_validated,
        }
    }

    pub fn into_entity(self, categories: Vec<String>) -> Genre {
        Genre {
            id: self.id,
            name: self.name,
            categories,
            is_validated: self.is_validated,
        }
    }
}

/// Association row linking a genre to a category. The table is shared with
/// the category repository; each side reads its own direction.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = category_genres)]
pub struct GenreCategoryRow {
    pub category_id: String,
    pub genre_id: String,
}
