use diesel::prelude::*;

use crate::modules::video::domain::{Rating, Video};
use crate::schema::{video_categories, video_genres, videos};
use crate::shared::errors::AppResult;

/// Row model for the `videos` table. The rating is stored as its wire tag
/// and re-validated on the way out.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = videos)]
pub struct VideoModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub opened: bool,
    pub rating: i32,
    pub duration: i32,
    pub video_file: Option<String>,
}

impl VideoModel {
    pub fn from_entity(video: &Video) -> Self {
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            description: video.description.clone(),
            year_launched: video.year_launched,
            opened: video.opened,
            rating: video.rating.into(),
            duration: video.duration,
            video_file: video.video_file.clone(),
        }
    }

    pub fn into_entity(self, categories: Vec<String>, genres: Vec<String>) -> AppResult<Video> {
        Ok(Video {
            id: self.id,
            title: self.title,
            description: self.description,
            year_launched: self.year_launched,
            opened: self.opened,
            rating: Rating::try_from(self.rating)?,
            duration: self.duration,
            categories,
            genres,
            video_file: self.video_file,
        })
    }
}

/// Association row linking a video to a category.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = video_categories)]
pub struct VideoCategoryRow {
    pub video_id: String,
    pub category_id: String,
}

/// Association row linking a video to a genre.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = video_genres)]
pub struct VideoGenreRow {
    pub video_id: String,
    pub genre_id: String,
}
