//! Roster loading - JSON faction records mapped into domain entities
//!
//! A roster file carries the factions in play plus the reference
//! records (homeworld candidates) the lookup collaborator resolves
//! against. Records without ids get fresh UUIDs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use suzerain_domain::model::asset::{Asset, AssetId};
use suzerain_domain::model::category::Category;
use suzerain_domain::model::faction::{Faction, FactionId};
use suzerain_domain::model::rating::Ratings;
use suzerain_domain::store::{FactionStore, StoreError};

/// Errors raised while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Faction '{faction}': {message}")]
    BadRecord { faction: String, message: String },

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

/// One asset record in a roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub income: i32,
    #[serde(default)]
    pub maintenance: u32,
    #[serde(default)]
    pub unusable: bool,
}

/// One faction record in a roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub force: u8,
    #[serde(default)]
    pub cunning: u8,
    #[serde(default)]
    pub wealth: u8,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub credits: i32,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub homeworld: Option<String>,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}

/// A reference record resolvable by the lookup collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub id: String,
    pub name: String,
}

/// A roster file: factions in play plus reference records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    #[serde(default)]
    pub factions: Vec<FactionRecord>,
    #[serde(default)]
    pub references: Vec<ReferenceEntry>,
}

impl Roster {
    /// Load a roster from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path)?;
        let roster: Self = serde_json::from_str(&content)?;
        Ok(roster)
    }

    /// Map every record into the domain and save it into the store.
    /// Returns the ids in roster order.
    pub fn seed(&self, store: &mut impl FactionStore) -> Result<Vec<FactionId>, RosterError> {
        let mut ids = Vec::with_capacity(self.factions.len());
        for record in &self.factions {
            let faction = record.to_faction()?;
            store.save(&faction)?;
            tracing::debug!(faction = faction.name(), "seeded faction");
            ids.push(faction.id().clone());
        }
        Ok(ids)
    }
}

impl FactionRecord {
    /// Map this record into a domain Faction
    pub fn to_faction(&self) -> Result<Faction, RosterError> {
        let bad = |message: String| RosterError::BadRecord {
            faction: self.name.clone(),
            message,
        };

        let ratings = Ratings::new(self.force, self.cunning, self.wealth)
            .map_err(|e| bad(e.to_string()))?;

        let id = self
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut faction = Faction::new(FactionId::new(id), self.name.as_str())
            .with_ratings(ratings)
            .with_xp(self.xp)
            .with_credits(self.credits);

        if let Some(ref goal) = self.goal {
            faction = faction.with_goal(goal.as_str());
        }
        if let Some(ref homeworld) = self.homeworld {
            faction = faction.with_homeworld(homeworld.as_str());
        }

        for record in &self.assets {
            let category: Category = record
                .category
                .parse()
                .map_err(|e: suzerain_domain::model::category::ParseCategoryError| {
                    bad(e.to_string())
                })?;
            let asset_id = record
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            faction = faction.with_asset(
                Asset::new(AssetId::new(asset_id), record.name.as_str(), category)
                    .with_income(record.income)
                    .with_maintenance(record.maintenance)
                    .with_unusable(record.unusable),
            );
        }

        Ok(faction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::in_memory::InMemoryFactionStore;
    use std::io::Write;

    const ROSTER_JSON: &str = r#"{
        "factions": [
            {
                "name": "Harmonious Vox",
                "force": 2,
                "cunning": 1,
                "wealth": 4,
                "credits": 10,
                "goal": "Expand Influence",
                "assets": [
                    {"name": "Franchise", "category": "wealth", "income": 1},
                    {"name": "Informers", "category": "cunning", "maintenance": 1}
                ]
            }
        ],
        "references": [
            {"id": "world-gunnhild", "name": "Gunnhild"}
        ]
    }"#;

    #[test]
    fn test_parse_roster() {
        let roster: Roster = serde_json::from_str(ROSTER_JSON).unwrap();
        assert_eq!(roster.factions.len(), 1);
        assert_eq!(roster.references.len(), 1);

        let faction = roster.factions[0].to_faction().unwrap();
        assert_eq!(faction.rating(Category::Wealth), 4);
        assert_eq!(faction.assets().len(), 2);
        assert_eq!(faction.goal(), Some("Expand Influence"));
        // Records without ids get generated ones.
        assert!(!faction.id().as_str().is_empty());
    }

    #[test]
    fn test_bad_category_rejected() {
        let record = FactionRecord {
            id: None,
            name: "Broken".to_string(),
            force: 0,
            cunning: 0,
            wealth: 0,
            xp: 0,
            credits: 0,
            goal: None,
            homeworld: None,
            assets: vec![AssetRecord {
                id: None,
                name: "Oddity".to_string(),
                category: "faith".to_string(),
                income: 0,
                maintenance: 0,
                unusable: false,
            }],
        };
        assert!(matches!(
            record.to_faction(),
            Err(RosterError::BadRecord { .. })
        ));
    }

    #[test]
    fn test_rating_above_cap_rejected() {
        let record = FactionRecord {
            id: None,
            name: "Broken".to_string(),
            force: 9,
            cunning: 0,
            wealth: 0,
            xp: 0,
            credits: 0,
            goal: None,
            homeworld: None,
            assets: Vec::new(),
        };
        assert!(record.to_faction().is_err());
    }

    #[test]
    fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", ROSTER_JSON).unwrap();

        let roster = Roster::from_file(file.path()).unwrap();
        let mut store = InMemoryFactionStore::new();
        let ids = roster.seed(&mut store).unwrap();

        assert_eq!(ids.len(), 1);
        let loaded = store.load(&ids[0]).unwrap().unwrap();
        assert_eq!(loaded.name(), "Harmonious Vox");
    }
}
