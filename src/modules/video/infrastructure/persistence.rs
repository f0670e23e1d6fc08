/// Diesel-based implementation of VideoRepository
///
/// Videos are hard-deleted. Every write that touches a link set runs in a
/// single transaction; category and genre references are verified inside
/// the same transaction, so a missing reference rolls the whole write back.
/// Referenced categories and genres must be live (`is_validated = true`).
use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;

use crate::modules::video::domain::{Video, VideoPatch, VideoRepository};
use crate::modules::video::infrastructure::models::{VideoCategoryRow, VideoGenreRow, VideoModel};
use crate::schema::{categories, genres, video_categories, video_genres, videos};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};

pub struct VideoRepositoryImpl {
    pool: DbPool,
}

impl VideoRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool.get().map_err(AppError::from)
    }

    fn check_category_refs(conn: &mut PgConnection, ids: &[String]) -> AppResult<()> {
        let found: i64 = categories::table
            .filter(categories::id.eq_any(ids))
            .filter(categories::is_validated.eq(true))
            .count()
            .get_result(conn)?;
        if found as usize != ids.len() {
            return Err(AppError::NotFound("referenced category".to_string()));
        }
        Ok(())
    }

    fn check_genre_refs(conn: &mut PgConnection, ids: &[String]) -> AppResult<()> {
        let found: i64 = genres::table
            .filter(genres::id.eq_any(ids))
            .filter(genres::is_validated.eq(true))
            .count()
            .get_result(conn)?;
        if found as usize != ids.len() {
            return Err(AppError::NotFound("referenced genre".to_string()));
        }
        Ok(())
    }

    fn load_category_links(
        conn: &mut PgConnection,
        ids: &[String],
    ) -> AppResult<HashMap<String, Vec<String>>> {
        let rows: Vec<VideoCategoryRow> = video_categories::table
            .filter(video_categories::video_id.eq_any(ids))
            .load(conn)?;

        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            links.entry(row.video_id).or_default().push(row.category_id);
        }
        Ok(links)
    }

    fn load_genre_links(
        conn: &mut PgConnection,
        ids: &[String],
    ) -> AppResult<HashMap<String, Vec<String>>> {
        let rows: Vec<VideoGenreRow> = video_genres::table
            .filter(video_genres::video_id.eq_any(ids))
            .load(conn)?;

        let mut links: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            links.entry(row.video_id).or_default().push(row.genre_id);
        }
        Ok(links)
    }

    fn replace_category_links(
        conn: &mut PgConnection,
        video_id: &str,
        category_ids: &[String],
    ) -> AppResult<()> {
        diesel::delete(video_categories::table.filter(video_categories::video_id.eq(video_id)))
            .execute(conn)?;

        let rows: Vec<VideoCategoryRow> = category_ids
            .iter()
            .map(|category_id| VideoCategoryRow {
                video_id: video_id.to_string(),
                category_id: category_id.clone(),
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(video_categories::table)
                .values(&rows)
                .execute(conn)?;
        }
        Ok(())
    }

    fn replace_genre_links(
        conn: &mut PgConnection,
        video_id: &str,
        genre_ids: &[String],
    ) -> AppResult<()> {
        diesel::delete(video_genres::table.filter(video_genres::video_id.eq(video_id)))
            .execute(conn)?;

        let rows: Vec<VideoGenreRow> = genre_ids
            .iter()
            .map(|genre_id| VideoGenreRow {
                video_id: video_id.to_string(),
                genre_id: genre_id.clone(),
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(video_genres::table)
                .values(&rows)
                .execute(conn)?;
        }
        Ok(())
    }
}

#[async_trait]
impl VideoRepository for VideoRepositoryImpl {
    async fn store(&self, video: Video) -> AppResult<Video> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            Self::check_category_refs(conn, &video.categories)?;
            Self::check_genre_refs(conn, &video.genres)?;

            let duplicates: i64 = videos::table
                .filter(videos::title.eq(&video.title))
                .count()
                .get_result(conn)?;
            if duplicates > 0 {
                return Err(AppError::AlreadyExists(format!("video '{}'", video.title)));
            }

            diesel::insert_into(videos::table)
                .values(VideoModel::from_entity(&video))
                .execute(conn)?;

            Self::replace_category_links(conn, &video.id, &video.categories)?;
            Self::replace_genre_links(conn, &video.id, &video.genres)?;

            Ok(video)
        })
    }

    async fn get_all(&self) -> AppResult<Vec<Video>> {
        let mut conn = self.get_conn()?;

        let models: Vec<VideoModel> = videos::table.order(videos::id.asc()).load(&mut conn)?;

        let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut category_links = Self::load_category_links(&mut conn, &ids)?;
        let mut genre_links = Self::load_genre_links(&mut conn, &ids)?;

        models
            .into_iter()
            .map(|model| {
                let categories = category_links.remove(&model.id).unwrap_or_default();
                let genres = genre_links.remove(&model.id).unwrap_or_default();
                model.into_entity(categories, genres)
            })
            .collect()
    }

    async fn get_many(&self, ids: &[String]) -> AppResult<Vec<Video>> {
        let mut conn = self.get_conn()?;

        let models: Vec<VideoModel> = videos::table
            .filter(videos::id.eq_any(ids))
            .load(&mut conn)?;

        let found: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut category_links = Self::load_category_links(&mut conn, &found)?;
        let mut genre_links = Self::load_genre_links(&mut conn, &found)?;

        let mut by_id = HashMap::new();
        for model in models {
            let categories = category_links.remove(&model.id).unwrap_or_default();
            let genres = genre_links.remove(&model.id).unwrap_or_default();
            let video = model.into_entity(categories, genres)?;
            by_id.insert(video.id.clone(), video);
        }

        // Preserve the caller's id order; unknown ids are skipped.
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn get_one(&self, id: &str) -> AppResult<Video> {
        let mut conn = self.get_conn()?;

        let model: Option<VideoModel> = videos::table
            .filter(videos::id.eq(id))
            .first(&mut conn)
            .optional()?;

        let model = model.ok_or_else(|| AppError::NotFound(format!("video '{}'", id)))?;
        let mut category_links =
            Self::load_category_links(&mut conn, std::slice::from_ref(&model.id))?;
        let mut genre_links = Self::load_genre_links(&mut conn, std::slice::from_ref(&model.id))?;
        let categories = category_links.remove(&model.id).unwrap_or_default();
        let genres = genre_links.remove(&model.id).unwrap_or_default();
        model.into_entity(categories, genres)
    }

    async fn delete_one(&self, id: &str) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            diesel::delete(video_categories::table.filter(video_categories::video_id.eq(id)))
                .execute(conn)?;
            diesel::delete(video_genres::table.filter(video_genres::video_id.eq(id)))
                .execute(conn)?;

            let affected = diesel::delete(videos::table.filter(videos::id.eq(id))).execute(conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!("video '{}'", id)));
            }
            Ok(())
        })
    }

    async fn update_one(&self, id: &str, patch: VideoPatch) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let model: Option<VideoModel> = videos::table
                .filter(videos::id.eq(id))
                .first(conn)
                .optional()?;
            let model = model.ok_or_else(|| AppError::NotFound(format!("video '{}'", id)))?;

            if let Some(title) = patch.title.as_deref() {
                let trimmed = title.trim();
                let duplicates: i64 = videos::table
                    .filter(videos::title.eq(trimmed))
                    .filter(videos::id.ne(id))
                    .count()
                    .get_result(conn)?;
                if duplicates > 0 {
                    return Err(AppError::AlreadyExists(format!("video '{}'", trimmed)));
                }
            }

            if let Some(category_ids) = patch.categories.as_deref() {
                Self::check_category_refs(conn, category_ids)?;
            }
            if let Some(genre_ids) = patch.genres.as_deref() {
                Self::check_genre_refs(conn, genre_ids)?;
            }

            let mut entity = model.into_entity(Vec::new(), Vec::new())?;
            entity.apply_patch(&patch)?;

            diesel::update(videos::table.filter(videos::id.eq(id)))
                .set(VideoModel::from_entity(&entity))
                .execute(conn)?;

            if let Some(category_ids) = &patch.categories {
                Self::replace_category_links(conn, id, category_ids)?;
            }
            if let Some(genre_ids) = &patch.genres {
                Self::replace_genre_links(conn, id, genre_ids)?;
            }

            Ok(())
        })
    }
}
