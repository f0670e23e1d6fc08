//! Identifier generation contract.
//!
//! Entities carry opaque string ids. The generator is injected into every
//! service so tests can pin ids deterministically.

use uuid::Uuid;

use crate::shared::errors::AppResult;

/// Produces fresh, universally-unique ids. Stateless and safe to share
/// across tasks.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh id; never an empty string on success.
    fn generate(&self) -> AppResult<String>;
}

/// Version-4 UUID generator: 36-character lowercase hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> AppResult<String> {
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_lowercase_hyphenated_36_chars() {
        let id = UuidIdGenerator.generate().unwrap();
        assert_eq!(id.len(), 36);
        assert_eq!(id, id.to_lowercase());
        assert_eq!(id.matches('-').count(), 4);
    }

    #[test]
    fn generates_distinct_ids() {
        let gen = UuidIdGenerator;
        let a = gen.generate().unwrap();
        let b = gen.generate().unwrap();
        assert_ne!(a, b);
    }
}
