pub mod memory;
pub mod models;
pub mod persistence;

pub use memory::InMemoryCastMemberRepository;
pub use persistence::CastMemberRepositoryImpl;
