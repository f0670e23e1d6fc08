pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::middleware::build_video_service;
pub use application::service::{VideoService, VideoServiceImpl};
pub use domain::{NewVideo, Rating, Video, VideoPatch, VideoRepository};
