use serde::{Deserialize, Serialize};

use crate::modules::video::domain::value_objects::Rating;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{check_all, Check};

/// The video aggregate. It references categories and genres by id only;
/// the link sets live with the repository. The file reference is an opaque
/// handle to an uploaded part and never leaves the backend on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub opened: bool,
    pub rating: Rating,
    pub duration: i32,
    #[serde(rename = "categories_id")]
    pub categories: Vec<String>,
    #[serde(rename = "genres_id")]
    pub genres: Vec<String>,
    #[serde(skip_serializing, default)]
    pub video_file: Option<String>,
}

impl Video {
    /// Create a video, enforcing the construction invariants: id and title
    /// non-empty after trimming, duration non-negative, and at least one
    /// category and genre reference.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        year_launched: i32,
        opened: bool,
        rating: Rating,
        duration: i32,
        categories: Vec<String>,
        genres: Vec<String>,
    ) -> AppResult<Self> {
        let id = id.into().trim().to_string();
        let title = title.into().trim().to_string();

        if let Some(err) = check_all([
            Check::new(
                id.is_empty(),
                AppError::CouldNotBeEmpty("video id".to_string()),
            ),
            Check::new(
                title.is_empty(),
                AppError::CouldNotBeEmpty("video title".to_string()),
            ),
            Check::new(
                duration < 0,
                AppError::IsNotValidated("video duration".to_string()),
            ),
            Check::new(
                categories.is_empty(),
                AppError::IsRequired("Categories".to_string()),
            ),
            Check::new(genres.is_empty(), AppError::IsRequired("Genres".to_string())),
        ]) {
            return Err(err);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            year_launched,
            opened,
            rating,
            duration,
            categories,
            genres,
            video_file: None,
        })
    }

    /// Attach the uploaded file handle. Stored verbatim; the contents are
    /// opaque to the catalog.
    pub fn with_file(mut self, video_file: Option<String>) -> Self {
        self.video_file = video_file;
        self
    }

    /// Overwrite the attributes present in the patch; absent fields are
    /// preserved. Tags and bounds are parsed before any mutation so a bad
    /// patch leaves the aggregate untouched.
    pub fn apply_patch(&mut self, patch: &VideoPatch) -> AppResult<()> {
        let rating = patch.rating.map(Rating::try_from).transpose()?;
        if let Some(duration) = patch.duration {
            if duration < 0 {
                return Err(AppError::IsNotValidated("video duration".to_string()));
            }
        }
        // A video must keep at least one reference of each kind; a present
        // empty set would strip them.
        if patch.categories.as_deref().map(|ids| ids.is_empty()).unwrap_or(false) {
            return Err(AppError::IsRequired("Categories".to_string()));
        }
        if patch.genres.as_deref().map(|ids| ids.is_empty()).unwrap_or(false) {
            return Err(AppError::IsRequired("Genres".to_string()));
        }

        if let Some(title) = &patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(year_launched) = patch.year_launched {
            self.year_launched = year_launched;
        }
        if let Some(opened) = patch.opened {
            self.opened = opened;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(categories) = &patch.categories {
            self.categories = categories.clone();
        }
        if let Some(genres) = &patch.genres {
            self.genres = genres.clone();
        }
        if let Some(video_file) = &patch.video_file {
            self.video_file = Some(video_file.clone());
        }
        Ok(())
    }
}

impl std::fmt::Display for Video {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year_launched)
    }
}

/// Construction descriptor for [`Video`]. Scalar fields arrive as options
/// so the service can tell absent from blank; the rating arrives as its
/// wire tag so the service owns the membership check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year_launched: Option<i32>,
    pub opened: Option<bool>,
    pub rating: Option<i32>,
    pub duration: Option<i32>,
    #[serde(rename = "categories_id", default)]
    pub categories: Vec<String>,
    #[serde(rename = "genres_id", default)]
    pub genres: Vec<String>,
    pub video_file: Option<String>,
}

impl NewVideo {
    /// True when every field is at its zero value.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.year_launched.is_none()
            && self.opened.is_none()
            && self.rating.is_none()
            && self.duration.is_none()
            && self.categories.is_empty()
            && self.genres.is_empty()
            && self.video_file.is_none()
    }
}

/// Update descriptor for [`Video`]: only present fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year_launched: Option<i32>,
    pub opened: Option<bool>,
    pub rating: Option<i32>,
    pub duration: Option<i32>,
    #[serde(rename = "categories_id")]
    pub categories: Option<Vec<String>>,
    #[serde(rename = "genres_id")]
    pub genres: Option<Vec<String>>,
    pub video_file: Option<String>,
}

impl VideoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.year_launched.is_none()
            && self.opened.is_none()
            && self.rating.is_none()
            && self.duration.is_none()
            && self.categories.is_none()
            && self.genres.is_none()
            && self.video_file.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ErrorKind;

    fn sample() -> Video {
        Video::new(
            "v1",
            "Seven Samurai",
            "classic",
            1954,
            true,
            Rating::Fourteen,
            207,
            vec!["c1".to_string()],
            vec!["g1".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn new_trims_title_and_keeps_casing() {
        let video = Video::new(
            "v1",
            "  Seven Samurai ",
            "",
            1954,
            false,
            Rating::Free,
            207,
            vec!["c1".to_string()],
            vec!["g1".to_string()],
        )
        .unwrap();
        assert_eq!(video.title, "Seven Samurai");
        assert!(video.video_file.is_none());
    }

    #[test]
    fn new_rejects_negative_duration() {
        let err = Video::new(
            "v1",
            "x",
            "",
            2000,
            false,
            Rating::Free,
            -1,
            vec!["c1".to_string()],
            vec!["g1".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, AppError::IsNotValidated("video duration".to_string()));
    }

    #[test]
    fn new_requires_category_and_genre_references() {
        let err = Video::new(
            "v1",
            "x",
            "",
            2000,
            false,
            Rating::Free,
            10,
            vec![],
            vec!["g1".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, AppError::IsRequired("Categories".to_string()));

        let err = Video::new(
            "v1",
            "x",
            "",
            2000,
            false,
            Rating::Free,
            10,
            vec!["c1".to_string()],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, AppError::IsRequired("Genres".to_string()));
    }

    #[test]
    fn apply_patch_rejects_bad_rating_without_mutating() {
        let mut video = sample();
        let err = video
            .apply_patch(&VideoPatch {
                title: Some("Renamed".to_string()),
                rating: Some(9),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
        assert_eq!(video.title, "Seven Samurai");
        assert_eq!(video.rating, Rating::Fourteen);
    }

    #[test]
    fn apply_patch_rejects_negative_duration_without_mutating() {
        let mut video = sample();
        let err = video
            .apply_patch(&VideoPatch {
                duration: Some(-5),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsNotValidated);
        assert_eq!(video.duration, 207);
    }

    #[test]
    fn apply_patch_rejects_empty_reference_sets_without_mutating() {
        let mut video = sample();
        let err = video
            .apply_patch(&VideoPatch {
                categories: Some(vec![]),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AppError::IsRequired("Categories".to_string()));
        assert_eq!(video.categories, vec!["c1".to_string()]);

        let err = video
            .apply_patch(&VideoPatch {
                title: Some("Renamed".to_string()),
                genres: Some(vec![]),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AppError::IsRequired("Genres".to_string()));
        assert_eq!(video.title, "Seven Samurai");
        assert_eq!(video.genres, vec!["g1".to_string()]);
    }

    #[test]
    fn apply_patch_overwrites_present_fields_only() {
        let mut video = sample();
        video
            .apply_patch(&VideoPatch {
                opened: Some(false),
                rating: Some(6),
                ..Default::default()
            })
            .unwrap();
        assert!(!video.opened);
        assert_eq!(video.rating, Rating::Eighteen);
        assert_eq!(video.year_launched, 1954);
    }

    #[test]
    fn wire_shape_hides_the_file_reference() {
        let video = sample().with_file(Some("upload-7f3a".to_string()));
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["categories_id"], serde_json::json!(["c1"]));
        assert_eq!(json["genres_id"], serde_json::json!(["g1"]));
        assert_eq!(json["rating"], serde_json::json!(4));
        assert!(json.get("video_file").is_none());
    }
}
