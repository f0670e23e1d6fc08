pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewVideo, Video, VideoPatch};
pub use repository::VideoRepository;
pub use value_objects::Rating;
