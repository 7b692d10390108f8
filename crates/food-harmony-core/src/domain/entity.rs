//! Domain Layer - Core Entity and Draft Traits
//!
//! These traits define the basic contract for all domain entities and for
//! the form payloads that create or replace them.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Create/update payload for an entity, excluding the identifier.
///
/// A draft whose trimmed name is empty is invalid; collections treat
/// operations carrying one as a no-op.
pub trait Draft: Sized {
    type Entry: Entity<Id = u32>;

    /// The draft's name with leading/trailing whitespace removed
    fn trimmed_name(&self) -> &str;

    /// Build the entity this draft describes, normalizing its fields
    fn build(self, id: u32) -> Self::Entry;

    fn is_valid(&self) -> bool {
        !self.trimmed_name().is_empty()
    }
}

/// Trim an optional free-text field; whitespace-only collapses to `None`
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// `Unavailable` and `Timeout` are carried by the search service contract so
/// that a real backend can report network failures; the bundled mock never
/// produces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Unavailable(String),
    Timeout(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Unavailable(msg) => write!(f, "Service unavailable: {}", msg),
            DomainError::Timeout(msg) => write!(f, "Timed out: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
