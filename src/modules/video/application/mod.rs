pub mod middleware;
pub mod service;

pub use middleware::build_video_service;
pub use service::{VideoService, VideoServiceImpl};
