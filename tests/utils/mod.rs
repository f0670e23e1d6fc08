#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use media_catalog::modules::category::domain::NewCategory;
use media_catalog::modules::genre::domain::NewGenre;
use media_catalog::modules::video::domain::NewVideo;
use media_catalog::shared::identifier::IdGenerator;
use media_catalog::shared::AppResult;

/// Always returns the same id, so tests can assert on server-assigned ids.
pub struct FixedIdGenerator(pub &'static str);

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> AppResult<String> {
        Ok(self.0.to_string())
    }
}

/// Returns "id-0", "id-1", ... so stored entities get predictable,
/// sortable ids.
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> AppResult<String> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(format!("id-{:03}", n))
    }
}

pub fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn new_genre(name: &str) -> NewGenre {
    NewGenre {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn new_video(title: &str, categories: Vec<String>, genres: Vec<String>) -> NewVideo {
    NewVideo {
        title: Some(title.to_string()),
        year_launched: Some(2020),
        rating: Some(1),
        duration: Some(90),
        categories,
        genres,
        ..Default::default()
    }
}
