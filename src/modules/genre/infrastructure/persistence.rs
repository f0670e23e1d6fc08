/// Diesel-based implementation of GenreRepository
///
/// Genres share the category soft-delete scheme: destroy flips
/// `is_validated` to false, reads filter on `is_validated = true`.
use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;

use crate::modules::genre::domain::{Genre, GenrePatch, GenreRepository};
use crate::modules::genre::infrastructure::models::{GenreCategoryRow, GenreModel};
use crate::schema::{category_genres, genres};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};

pub struct GenreRepositoryImpl {
    pool: DbPool,
}

impl GenreRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool.get().map_err(AppError::from)
    }

    fn load_category_links(
        conn: &mut PgConnection,
        ids: &[String],
    ) -> AppResult<HashMap<String, Vec<String>>> {
        let rows: Vec<GenreCategoryRow> = category_genres::table
            .filter(category_genres::genre_id.eq_any(ids))
            .load(conn)?;

        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            links.entry(row.genre_id).or_default().push(row.category_id);
        }
        Ok(links)
    }

    fn replace_category_links(
        conn: &mut PgConnection,
        genre_id: &str,
        categories: &[String],
    ) -> AppResult<()> {
        diesel::delete(category_genres::table.filter(category_genres::genre_id.eq(genre_id)))
            .execute(conn)?;

        let rows: Vec<GenreCategoryRow> = categories
            .iter()
            .map(|category_id| GenreCategoryRow {
                category_id: category_id.clone(),
                genre_id: genre_id.to_string(),
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(category_genres::table)
                .values(&rows)
                .execute(conn)?;
        }
        Ok(())
    }
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn store(&self, genre: Genre) -> AppResult<Genre> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let duplicates: i64 = genres::table
                .filter(genres::name.eq(&genre.name))
                .count()
                .get_result(conn)?;
            if duplicates > 0 {
                return Err(AppError::AlreadyExists(format!("genre '{}'", genre.name)));
            }

            let mut model = GenreModel::from_entity(&genre);
            model.is_validated = true;
            diesel::insert_into(genres::table)
                .values(&model)
                .execute(conn)?;

            Self::replace_category_links(conn, &genre.id, &genre.categories)?;

            Ok(model.into_entity(genre.categories.clone()))
        })
    }

    async fn get_all(&self) -> AppResult<Vec<Genre>> {
        let mut conn = self.get_conn()?;

        let models: Vec<GenreModel> = genres::table
            .filter(genres::is_validated.eq(true))
            .order(genres::id.asc())
            .load(&mut conn)?;

        let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut links = Self::load_category_links(&mut conn, &ids)?;

        Ok(models
            .into_iter()
            .map(|model| {
                let categories = links.remove(&model.id).unwrap_or_default();
                model.into_entity(categories)
            })
            .collect())
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Genre>> {
        let mut conn = self.get_conn()?;

        let models: Vec<GenreModel> = genres::table
            .filter(genres::id.eq_any(ids))
            .filter(genres::is_validated.eq(true))
            .load(&mut conn)?;

        let found: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut links = Self::load_category_links(&mut conn, &found)?;

        let mut by_id: HashMap<String, Genre> = models
            .into_iter()
            .map(|model| {
                let categories = links.remove(&model.id).unwrap_or_default();
                (model.id.clone(), model.into_entity(categories))
            })
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<Genre> {
        let mut conn = self.get_conn()?;

        let model: Option<GenreModel> = genres::table
            .filter(genres::id.eq(id))
            .filter(genres::is_validated.eq(true))
            .first(&mut conn)
            .optional()?;

        let model = model.ok_or_else(|| AppError::NotFound(format!("genre '{}'", id)))?;
        let mut links = Self::load_category_links(&mut conn, std::slice::from_ref(&model.id))?;
        let categories = links.remove(&model.id).unwrap_or_default();
        Ok(model.into_entity(categories))
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        let affected = diesel::update(
            genres::table
                .filter(genres::id.eq(id))
                .filter(genres::is_validated.eq(true)),
        )
        .set(genres::is_validated.eq(false))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(AppError::NotFound(format!("genre '{}'", id)));
        }
        Ok(())
    }

    async fn update_one(&self, id: &str, patch: GenrePatch) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let model: Option<GenreModel> = genres::table
                .filter(genres::id.eq(id))
                .filter(genres::is_validated.eq(true))
                .first(conn)
                .optional()?;
            let model = model.ok_or_else(|| AppError::NotFound(format!("genre '{}'", id)))?;

            if let Some(name) = patch.name.as_deref() {
                let normalized = name.trim().to_lowercase();
                let duplicates: i64 = genres::table
                    .filter(genres::name.eq(&normalized))
                    .filter(genres::id.ne(id))
                    .count()
                    .get_result(conn)?;
                if duplicates > 0 {
                    return Err(AppError::AlreadyExists(format!("genre '{}'", normalized)));
                }
            }

            // The row was loaded live (`is_validated = true`); a present
            // patch flag flows through `apply_patch`.
            let mut entity = model.into_entity(Vec::new());
            entity.apply_patch(&patch);
            let updated = GenreModel::from_entity(&entity);

            diesel::update(genres::table.filter(genres::id.eq(id)))
                .set(&updated)
                .execute(conn)?;

            if let Some(categories) = &patch.categories {
                Self::replace_category_links(conn, id, categories)?;
            }

            Ok(())
        })
    }
}
