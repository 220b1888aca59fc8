//! Faction - The aggregate root of the turn engine
//!
//! A Faction is an Entity (has identity that persists through changes).
//! It owns its assets exclusively: an asset's lifetime never exceeds its
//! faction's. The engine reads the aggregate and proposes mutations as
//! field patches; entity creation and deletion belong to the host.

use super::asset::{Asset, AssetId, AssetPatch};
use super::category::Category;
use super::rating::{RatingOutOfRange, Ratings};
use crate::service::derived::DerivedStats;

/// Unique identifier for a Faction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactionId(String);

impl FactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Health pair: `max` is derived from the ratings, `value` is the
/// current total tracked by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Health {
    pub max: u32,
    pub value: u32,
}

/// Faction - The aggregate root
///
/// Credits may sit negative after a committed shortfall, so they are
/// signed. XP is a spendable pool shared across all three ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faction {
    /// Unique identifier (Entity identity)
    id: FactionId,
    /// Display name
    name: String,
    /// The three capability ratings
    ratings: Ratings,
    /// Experience pool, spent on rating progression
    xp: u32,
    /// Spendable turn-to-turn resource
    credits: i32,
    /// Current goal; absence signals a turn-start decision point
    goal: Option<String>,
    /// Homeworld display name, if set
    homeworld: Option<String>,
    /// Derived health pair
    health: Health,
    /// Owned assets, in ledger order
    assets: Vec<Asset>,
}

impl Faction {
    /// Create a new Faction with zeroed ratings and resources
    pub fn new(id: FactionId, name: impl Into<String>) -> Self {
        let mut faction = Self {
            id,
            name: name.into(),
            ratings: Ratings::default(),
            xp: 0,
            credits: 0,
            goal: None,
            homeworld: None,
            health: Health::default(),
            assets: Vec::new(),
        };
        faction.refresh_derived();
        faction
    }

    /// Builder: set all three ratings
    pub fn with_ratings(mut self, ratings: Ratings) -> Self {
        self.ratings = ratings;
        self.refresh_derived();
        self
    }

    /// Builder: set the XP pool
    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = xp;
        self
    }

    /// Builder: set credits
    pub fn with_credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    /// Builder: set the current goal
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Builder: set the homeworld
    pub fn with_homeworld(mut self, homeworld: impl Into<String>) -> Self {
        self.homeworld = Some(homeworld.into());
        self
    }

    /// Builder: add an asset
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self.refresh_derived();
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &FactionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn rating(&self, category: Category) -> u8 {
        self.ratings.get(category)
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    pub fn homeworld(&self) -> Option<&str> {
        self.homeworld.as_deref()
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// All assets of one category, usable or not
    pub fn assets_in(&self, category: Category) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(move |a| a.category() == category)
    }

    /// Find an asset by id
    pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id() == id)
    }

    // ========== Mutations ==========

    /// Set a rating and refresh the derived fields
    pub fn set_rating(&mut self, category: Category, level: u8) -> Result<(), FactionError> {
        self.ratings.set(category, level)?;
        self.refresh_derived();
        Ok(())
    }

    pub fn set_xp(&mut self, xp: u32) {
        self.xp = xp;
    }

    pub fn set_credits(&mut self, credits: i32) {
        self.credits = credits;
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = Some(goal.into());
    }

    /// Reset the goal to unset
    pub fn clear_goal(&mut self) {
        self.goal = None;
    }

    pub fn set_homeworld(&mut self, homeworld: impl Into<String>) {
        self.homeworld = Some(homeworld.into());
    }

    /// Apply a field patch to one owned asset
    pub fn apply_asset(&mut self, id: &AssetId, patch: &AssetPatch) -> Result<(), FactionError> {
        let asset = self
            .assets
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| FactionError::UnknownAsset {
                id: id.as_str().to_string(),
            })?;
        asset.apply(patch);
        self.refresh_derived();
        Ok(())
    }

    /// Apply a field patch to the faction
    pub fn apply(&mut self, patch: &FactionPatch) -> Result<(), FactionError> {
        if let Some((category, level)) = patch.rating {
            self.ratings.set(category, level)?;
        }
        if let Some(xp) = patch.xp {
            self.xp = xp;
        }
        if let Some(credits) = patch.credits {
            self.credits = credits;
        }
        if let Some(ref goal) = patch.goal {
            self.goal = goal.clone();
        }
        if let Some(ref homeworld) = patch.homeworld {
            self.homeworld = homeworld.clone();
        }
        self.refresh_derived();
        Ok(())
    }

    /// Recompute derived fields from the current ratings and assets.
    ///
    /// Invoked after every mutation to either; idempotent.
    pub fn refresh_derived(&mut self) {
        let derived = DerivedStats::compute(&self.ratings, &self.assets);
        self.health.max = derived.max_health;
    }
}

/// Field patch proposed for a Faction - only set fields are applied.
///
/// `goal` and `homeworld` are doubly optional: the outer `Option` is
/// "patch this field", the inner is the new value (`None` clears it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactionPatch {
    pub credits: Option<i32>,
    pub xp: Option<u32>,
    pub rating: Option<(Category, u8)>,
    pub goal: Option<Option<String>>,
    pub homeworld: Option<Option<String>>,
}

impl FactionPatch {
    /// Patch that commits a credits value
    pub fn credits(credits: i32) -> Self {
        Self {
            credits: Some(credits),
            ..Self::default()
        }
    }

    /// Patch that commits a rating raise together with the spent-down
    /// XP pool (atomic from the caller's point of view)
    pub fn rating_raise(category: Category, level: u8, remaining_xp: u32) -> Self {
        Self {
            xp: Some(remaining_xp),
            rating: Some((category, level)),
            ..Self::default()
        }
    }

    /// Patch that sets a goal
    pub fn goal(goal: impl Into<String>) -> Self {
        Self {
            goal: Some(Some(goal.into())),
            ..Self::default()
        }
    }

    /// Patch that resets the goal to unset
    pub fn clear_goal() -> Self {
        Self {
            goal: Some(None),
            ..Self::default()
        }
    }

    /// Patch that sets the homeworld
    pub fn homeworld(homeworld: impl Into<String>) -> Self {
        Self {
            homeworld: Some(Some(homeworld.into())),
            ..Self::default()
        }
    }
}

/// Errors that can occur during Faction mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactionError {
    RatingOutOfRange(RatingOutOfRange),
    UnknownAsset { id: String },
}

impl From<RatingOutOfRange> for FactionError {
    fn from(err: RatingOutOfRange) -> Self {
        FactionError::RatingOutOfRange(err)
    }
}

impl core::fmt::Display for FactionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FactionError::RatingOutOfRange(err) => write!(f, "{}", err),
            FactionError::UnknownAsset { id } => write!(f, "No asset with id '{}'", id),
        }
    }
}

impl std::error::Error for FactionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_faction_has_base_health() {
        let faction = Faction::new(FactionId::new("f-001"), "Harmonious Vox");
        assert_eq!(faction.health().max, 4);
    }

    #[test]
    fn test_ratings_drive_derived_health() {
        let faction = Faction::new(FactionId::new("f-001"), "Harmonious Vox")
            .with_ratings(Ratings::new(3, 0, 0).unwrap());
        // 4 + table(3) = 4 + 4
        assert_eq!(faction.health().max, 8);
    }

    #[test]
    fn test_apply_patch_clears_goal() {
        let mut faction = Faction::new(FactionId::new("f-001"), "Harmonious Vox")
            .with_goal("Expand Influence");

        faction.apply(&FactionPatch::clear_goal()).unwrap();
        assert_eq!(faction.goal(), None);

        // Empty patch leaves the field alone
        faction.set_goal("Peaceable Kingdom");
        faction.apply(&FactionPatch::default()).unwrap();
        assert_eq!(faction.goal(), Some("Peaceable Kingdom"));
    }

    #[test]
    fn test_apply_rejects_out_of_range_rating() {
        let mut faction = Faction::new(FactionId::new("f-001"), "Harmonious Vox");
        let patch = FactionPatch {
            rating: Some((Category::Force, 9)),
            ..FactionPatch::default()
        };
        assert!(faction.apply(&patch).is_err());
        assert_eq!(faction.rating(Category::Force), 0);
    }

    #[test]
    fn test_apply_asset_patch() {
        let id = AssetId::new("a-001");
        let mut faction = Faction::new(FactionId::new("f-001"), "Harmonious Vox")
            .with_asset(Asset::new(id.clone(), "Informers", Category::Cunning));

        faction.apply_asset(&id, &AssetPatch::unusable()).unwrap();
        assert!(faction.asset(&id).unwrap().unusable());

        let missing = AssetId::new("a-999");
        assert!(faction.apply_asset(&missing, &AssetPatch::unusable()).is_err());
    }
}
