pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::middleware::build_cast_member_service;
pub use application::service::{CastMemberService, CastMemberServiceImpl};
pub use domain::{CastKind, CastMember, CastMemberPatch, CastMemberRepository, NewCastMember};
