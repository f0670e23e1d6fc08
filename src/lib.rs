//! Core domain model and service layer of a small media catalog.
//!
//! Four entity modules (category, genre, cast member, video) share the same
//! three-layer shape: domain entities with constructor-enforced invariants,
//! an application service wrapped by validation and logging middlewares, and
//! a repository contract satisfied by an in-memory store and a PostgreSQL
//! store. Transport adapters live outside this crate and talk to the
//! composed service handles built by [`composition::Catalog`].

pub mod composition;
pub mod modules;
mod schema;
pub mod shared;

pub use composition::Catalog;
pub use shared::errors::{AppError, AppResult, ErrorKind};
