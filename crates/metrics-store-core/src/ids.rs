//! Record identifier generation.

use uuid::Uuid;

/// Source of fresh record identifiers.
///
/// Implementations must be safe to call concurrently. Uniqueness is expected
/// with overwhelming probability, not guaranteed; the store still rejects
/// duplicates.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs, hyphenated lowercase.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Ids;

impl IdGenerator for UuidV4Ids {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
