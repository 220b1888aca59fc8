//! In-Memory Store Implementation
//!
//! Simple in-memory implementation of the `FactionStore` port.
//! Useful for testing, demos, and single-session play.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use suzerain_domain::model::asset::{AssetId, AssetPatch};
use suzerain_domain::model::faction::{Faction, FactionId, FactionPatch};
use suzerain_domain::store::{FactionStore, StoreError};

/// In-memory Faction Store
///
/// Thread-safe implementation using RwLock. Patches are applied to the
/// stored aggregate in one write-lock section, so a commit is
/// all-or-nothing as the port requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFactionStore {
    factions: Arc<RwLock<HashMap<String, Faction>>>,
}

impl InMemoryFactionStore {
    pub fn new() -> Self {
        Self {
            factions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn write_lock_error() -> StoreError {
        StoreError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        }
    }

    fn read_lock_error() -> StoreError {
        StoreError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        }
    }
}

impl FactionStore for InMemoryFactionStore {
    fn save(&mut self, faction: &Faction) -> Result<(), StoreError> {
        let mut factions = self
            .factions
            .write()
            .map_err(|_| Self::write_lock_error())?;
        factions.insert(faction.id().as_str().to_string(), faction.clone());
        Ok(())
    }

    fn load(&self, id: &FactionId) -> Result<Option<Faction>, StoreError> {
        let factions = self.factions.read().map_err(|_| Self::read_lock_error())?;
        Ok(factions.get(id.as_str()).cloned())
    }

    fn commit_faction(&mut self, id: &FactionId, patch: &FactionPatch) -> Result<(), StoreError> {
        let mut factions = self
            .factions
            .write()
            .map_err(|_| Self::write_lock_error())?;
        let faction = factions
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::NotFound {
                id: id.as_str().to_string(),
            })?;
        faction.apply(patch).map_err(|e| StoreError::Persistence {
            message: e.to_string(),
        })?;
        tracing::debug!(faction = id.as_str(), "committed faction patch");
        Ok(())
    }

    fn commit_assets(
        &mut self,
        id: &FactionId,
        patches: &[(AssetId, AssetPatch)],
    ) -> Result<(), StoreError> {
        let mut factions = self
            .factions
            .write()
            .map_err(|_| Self::write_lock_error())?;
        let faction = factions
            .get_mut(id.as_str())
            .ok_or_else(|| StoreError::NotFound {
                id: id.as_str().to_string(),
            })?;

        // Validate every patch target before mutating anything, so a
        // bad id cannot leave the batch half-applied.
        for (asset_id, _) in patches {
            if faction.asset(asset_id).is_none() {
                return Err(StoreError::Persistence {
                    message: format!("No asset with id '{}'", asset_id),
                });
            }
        }
        for (asset_id, patch) in patches {
            faction
                .apply_asset(asset_id, patch)
                .map_err(|e| StoreError::Persistence {
                    message: e.to_string(),
                })?;
        }
        tracing::debug!(
            faction = id.as_str(),
            patched = patches.len(),
            "committed asset patches"
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<Faction>, StoreError> {
        let factions = self.factions.read().map_err(|_| Self::read_lock_error())?;
        Ok(factions.values().cloned().collect())
    }
}
