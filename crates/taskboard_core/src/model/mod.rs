//! Board domain model: projects (columns) owning ordered tasks (cards).
//!
//! # Responsibility
//! - Define the serialized shape shared by reducer, storage and callers.
//! - Provide read-only lookup helpers over one board snapshot.
//!
//! # Invariants
//! - Task ids are unique across the whole board, not only within a project.
//! - A task lives in exactly one project's sequence at any instant.
//! - Project ids come from the fixed seed and never collide.

pub mod project;
pub mod state;
pub mod task;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
