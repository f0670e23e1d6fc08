pub mod middleware;
pub mod service;

pub use middleware::build_cast_member_service;
pub use service::{CastMemberService, CastMemberServiceImpl};
