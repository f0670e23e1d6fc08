/// Diesel-based implementation of CategoryRepository
///
/// Categories are soft-deleted: destroy flips `is_validated` to false and
/// every read filters on `is_validated = true`. Stored rows are marked live
/// on insert. Writes that touch the genre link set run in one transaction.
use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;

use crate::modules::category::domain::{Category, CategoryPatch, CategoryRepository};
use crate::modules::category::infrastructure::models::{CategoryGenreRow, CategoryModel};
use crate::schema::{categories, category_genres};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};

pub struct CategoryRepositoryImpl {
    pool: DbPool,
}

impl CategoryRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool.get().map_err(AppError::from)
    }

    fn load_genre_links(
        conn: &mut PgConnection,
        ids: &[String],
    ) -> AppResult<HashMap<String, Vec<String>>> {
        let rows: Vec<CategoryGenreRow> = category_genres::table
            .filter(category_genres::category_id.eq_any(ids))
            .load(conn)?;

        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            links.entry(row.category_id).or_default().push(row.genre_id);
        }
        Ok(links)
    }

    fn replace_genre_links(
        conn: &mut PgConnection,
        category_id: &str,
        genres: &[String],
    ) -> AppResult<()> {
        diesel::delete(
            category_genres::table.filter(category_genres::category_id.eq(category_id)),
        )
        .execute(conn)?;

        let rows: Vec<CategoryGenreRow> = genres
            .iter()
            .map(|genre_id| CategoryGenreRow {
                category_id: category_id.to_string(),
                genre_id: genre_id.clone(),
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
impl CategoryRepository for CategoryRepositoryImpl {
    async fn store(&self, category: Category) -> AppResult<Category> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let duplicates: i64 = categories::table
                .filter(categories::name.eq(&category.name))
                .count()
                .get_result(conn)?;
            if duplicates > 0 {
                return Err(AppError::AlreadyExists(format!(
                    "category '{}'",
                    category.name
                )));
            }

            // In this backend `is_validated = false` means soft-deleted, so
            // fresh rows are inserted live.
            let mut model = CategoryModel::from_entity(&category);
            model.is_validated = true;
            diesel::insert_into(categories::table)
                .values(&model)
                .execute(conn)?;

            Self::replace_genre_links(conn, &category.id, &category.genres)?;

            Ok(model.into_entity(category.genres.clone()))
        })
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let mut conn = self.get_conn()?;

        let models: Vec<CategoryModel> = categories::table
            .filter(categories::is_validated.eq(true))
            .order(categories::id.asc())
            .load(&mut conn)?;

        let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut links = Self::load_genre_links(&mut conn, &ids)?;

        Ok(models
            .into_iter()
            .map(|model| {
                let genres = links.remove(&model.id).unwrap_or_default();
                model.into_entity(genres)
            })
            .collect())
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Category>> {
        let mut conn = self.get_conn()?;

        let models: Vec<CategoryModel> = categories::table
            .filter(categories::id.eq_any(ids))
            .filter(categories::is_validated.eq(true))
            .load(&mut conn)?;

        let found: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut links = Self::load_genre_links(&mut conn, &found)?;

        let mut by_id: HashMap<String, Category> = models
            .into_iter()
            .map(|model| {
                let genres = links.remove(&model.id).unwrap_or_default();
                (model.id.clone(), model.into_entity(genres))
            })
            .collect();

        // Preserve the caller's id order; unknown ids are skipped.
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<Category> {
        let mut conn = self.get_conn()?;

        let model: Option<CategoryModel> = categories::table
            .filter(categories::id.eq(id))
            .filter(categories::is_validated.eq(true))
            .first(&mut conn)
            .optional()?;

        let model = model.ok_or_else(|| AppError::NotFound(format!("category '{}'", id)))?;
        let mut links = Self::load_genre_links(&mut conn, std::slice::from_ref(&model.id))?;
        let genres = links.remove(&model.id).unwrap_or_default();
        Ok(model.into_entity(genres))
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        let affected = diesel::update(
            categories::table
                .filter(categories::id.eq(id))
                .filter(categories::is_validated.eq(true)),
        )
        .set(categories::is_validated.eq(false))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(AppError::NotFound(format!("category '{}'", id)));
        }
        Ok(())
    }

    async fn update_one(&self, id: &str, patch: CategoryPatch) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let model: Option<CategoryModel> = categories::table
                .filter(categories::id.eq(id))
                .filter(categories::is_validated.eq(true))
                .first(conn)
                .optional()?;
            let model = model.ok_or_else(|| AppError::NotFound(format!("category '{}'", id)))?;

            if let Some(name) = patch.name.as_deref() {
                let normalized = name.trim().to_lowercase();
                let duplicates: i64 = categories::table
                    .filter(categories::name.eq(&normalized))
                    .filter(categories::id.ne(id))
                    .count()
                    .get_result(conn)?;
                if duplicates > 0 {
                    return Err(AppError::AlreadyExists(format!(
                        "category '{}'",
                        normalized
                    )));
                }
            }

            // The row was loaded live (`is_validated = true`); a present
            // patch flag flows through `apply_patch`.
            let mut entity = model.into_entity(Vec::new());
            entity.apply_patch(&patch);
            let updated = CategoryModel::from_entity(&entity);

            diesel::update(categories::table.filter(categories::id.eq(id)))
                .set(&updated)
                .execute(conn)?;

            if let Some(genres) = &patch.genres {
                Self::replace_genre_links(conn, id, genres)?;
            }

            Ok(())
        })
    }
}
