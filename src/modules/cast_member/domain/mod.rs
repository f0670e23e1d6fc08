pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{CastMember, CastMemberPatch, NewCastMember};
pub use repository::CastMemberRepository;
pub use value_objects::CastKind;
