//! Asset - An owned holding of a faction
//!
//! Asset is an Entity (has identity). It belongs to exactly one
//! capability category, contributes income each turn, and may owe
//! maintenance. An asset whose upkeep cannot be paid is flagged
//! unusable; that flag is the only field turn resolution ever mutates.

use super::category::Category;

/// Unique identifier for an Asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AssetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asset - One holding on a faction's ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Unique identifier (Entity identity)
    id: AssetId,
    /// Display name
    name: String,
    /// The capability category this asset belongs to (exactly one)
    category: Category,
    /// Income contributed each turn (may be zero or negative)
    income: i32,
    /// Per-turn upkeep owed; zero means no upkeep
    maintenance: u32,
    /// Disabled state, set when upkeep cannot be paid
    unusable: bool,
}

impl Asset {
    /// Create a new usable Asset
    pub fn new(id: AssetId, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            income: 0,
            maintenance: 0,
            unusable: false,
        }
    }

    /// Builder: set per-turn income
    pub fn with_income(mut self, income: i32) -> Self {
        self.income = income;
        self
    }

    /// Builder: set per-turn maintenance
    pub fn with_maintenance(mut self, maintenance: u32) -> Self {
        self.maintenance = maintenance;
        self
    }

    /// Builder: set the unusable flag
    pub fn with_unusable(mut self, unusable: bool) -> Self {
        self.unusable = unusable;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &AssetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn income(&self) -> i32 {
        self.income
    }

    pub fn maintenance(&self) -> u32 {
        self.maintenance
    }

    pub fn unusable(&self) -> bool {
        self.unusable
    }

    /// True when this asset owes upkeep each turn
    pub fn is_maintained(&self) -> bool {
        self.maintenance > 0
    }

    // ========== Mutations ==========

    /// Flag this asset unusable (or restore it)
    pub fn set_unusable(&mut self, unusable: bool) {
        self.unusable = unusable;
    }

    /// Apply a field patch
    pub fn apply(&mut self, patch: &AssetPatch) {
        if let Some(unusable) = patch.unusable {
            self.unusable = unusable;
        }
    }
}

/// Field patch proposed for an Asset - only set fields are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetPatch {
    pub unusable: Option<bool>,
}

impl AssetPatch {
    /// Patch that flags an asset unusable
    pub fn unusable() -> Self {
        Self {
            unusable: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let asset = Asset::new(AssetId::new("a-001"), "Smugglers", Category::Cunning)
            .with_income(2)
            .with_maintenance(1);

        assert_eq!(asset.category(), Category::Cunning);
        assert_eq!(asset.income(), 2);
        assert!(asset.is_maintained());
        assert!(!asset.unusable());
    }

    #[test]
    fn test_apply_patch() {
        let mut asset = Asset::new(AssetId::new("a-001"), "Base of Influence", Category::Force);

        asset.apply(&AssetPatch::unusable());
        assert!(asset.unusable());

        // An empty patch changes nothing
        asset.apply(&AssetPatch::default());
        assert!(asset.unusable());
    }
}
