//! FactionStore - The persistence "Port" of the engine
//!
//! This trait defines HOW the domain wants faction state persisted,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait FactionStore    │  InMemoryFactionStore
//!   fn commit_faction() │  (a database-backed store,
//!   fn commit_assets()  │   a host-bridge store, ...)
//! ```
//!
//! Commits are atomic, all-or-nothing, from the engine's perspective:
//! a failed commit leaves the proposed values uncommitted and the
//! engine performs no retry or rollback.

use crate::model::asset::{AssetId, AssetPatch};
use crate::model::faction::{Faction, FactionId, FactionPatch};

/// Faction Store Trait
pub trait FactionStore {
    /// Insert or replace a whole faction (seeding, host sync)
    fn save(&mut self, faction: &Faction) -> Result<(), StoreError>;

    /// Load a faction by id
    fn load(&self, id: &FactionId) -> Result<Option<Faction>, StoreError>;

    /// Persist a faction field patch
    fn commit_faction(&mut self, id: &FactionId, patch: &FactionPatch) -> Result<(), StoreError>;

    /// Persist per-asset field patches for one faction's assets
    fn commit_assets(
        &mut self,
        id: &FactionId,
        patches: &[(AssetId, AssetPatch)],
    ) -> Result<(), StoreError>;

    /// List every stored faction
    fn list(&self) -> Result<Vec<Faction>, StoreError>;
}

/// Errors raised by store implementations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No faction with the given id
    NotFound { id: String },
    /// The backing store rejected the operation
    Persistence { message: String },
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "No faction with id '{}'", id),
            StoreError::Persistence { message } => write!(f, "Store failure: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}
