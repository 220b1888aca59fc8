//! DerivedStats - Read-only fields recomputed from ratings and assets
//!
//! A pure function of `(ratings, assets)`: the category partitions (by
//! asset id) and the maximum health. Conceptually re-run after every
//! mutation to either input; calling it twice on unchanged input yields
//! identical output.

use crate::model::asset::{Asset, AssetId};
use crate::model::category::Category;
use crate::model::rating::{rating_table, Ratings};

/// Base health every faction has before rating contributions
pub const BASE_HEALTH: u32 = 4;

/// Refreshed derived fields of a faction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStats {
    /// `BASE_HEALTH` plus the table contribution of each rating
    pub max_health: u32,
    pub force_assets: Vec<AssetId>,
    pub cunning_assets: Vec<AssetId>,
    pub wealth_assets: Vec<AssetId>,
}

impl DerivedStats {
    /// Recompute every derived field. Never fails.
    pub fn compute(ratings: &Ratings, assets: &[Asset]) -> Self {
        let ids_in = |category: Category| -> Vec<AssetId> {
            assets
                .iter()
                .filter(|a| a.category() == category)
                .map(|a| a.id().clone())
                .collect()
        };

        Self {
            max_health: BASE_HEALTH
                + rating_table(ratings.get(Category::Wealth))
                + rating_table(ratings.get(Category::Force))
                + rating_table(ratings.get(Category::Cunning)),
            force_assets: ids_in(Category::Force),
            cunning_assets: ids_in(Category::Cunning),
            wealth_assets: ids_in(Category::Wealth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::Asset;

    #[test]
    fn test_max_health_formula() {
        // With all three ratings equal to r, max = 4 + 3 * table(r).
        for r in 0..=8u8 {
            let ratings = Ratings::new(r, r, r).unwrap();
            let derived = DerivedStats::compute(&ratings, &[]);
            assert_eq!(derived.max_health, 4 + 3 * rating_table(r));
        }
    }

    #[test]
    fn test_mixed_ratings() {
        let ratings = Ratings::new(2, 5, 8).unwrap();
        let derived = DerivedStats::compute(&ratings, &[]);
        // 4 + 2 + 9 + 20
        assert_eq!(derived.max_health, 35);
    }

    #[test]
    fn test_partitions_by_id() {
        let assets = vec![
            Asset::new(AssetId::new("a-1"), "Smugglers", Category::Cunning),
            Asset::new(AssetId::new("a-2"), "Franchise", Category::Wealth),
            Asset::new(AssetId::new("a-3"), "Informers", Category::Cunning),
        ];
        let derived = DerivedStats::compute(&Ratings::default(), &assets);

        assert_eq!(derived.cunning_assets.len(), 2);
        assert_eq!(derived.wealth_assets, vec![AssetId::new("a-2")]);
        assert!(derived.force_assets.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let ratings = Ratings::new(1, 2, 3).unwrap();
        let assets = vec![Asset::new(AssetId::new("a-1"), "Base", Category::Force)];

        let first = DerivedStats::compute(&ratings, &assets);
        let second = DerivedStats::compute(&ratings, &assets);
        assert_eq!(first, second);
    }
}
