//! AssetLedger - Classify and aggregate a faction's assets for one turn
//!
//! The ledger is a pure, non-persisted view over the asset collection:
//! category partitions, income and maintenance totals, and the
//! per-category over-limit signals. It is tallied fresh each turn and
//! never mutates anything.

use crate::model::asset::Asset;
use crate::model::category::Category;
use crate::model::rating::Ratings;

/// One turn's classified view of a faction's assets
#[derive(Debug, Clone)]
pub struct AssetLedger<'a> {
    force_assets: Vec<&'a Asset>,
    cunning_assets: Vec<&'a Asset>,
    wealth_assets: Vec<&'a Asset>,
    maintained: Vec<&'a Asset>,
    asset_income_total: i32,
    maintenance_total: u32,
    force_over_limit: i32,
    cunning_over_limit: i32,
    wealth_over_limit: i32,
}

impl<'a> AssetLedger<'a> {
    /// Tally the ledger from the current ratings and asset collection
    pub fn tally(ratings: &Ratings, assets: &'a [Asset]) -> Self {
        let partition = |category: Category| -> Vec<&'a Asset> {
            assets.iter().filter(|a| a.category() == category).collect()
        };
        let force_assets = partition(Category::Force);
        let cunning_assets = partition(Category::Cunning);
        let wealth_assets = partition(Category::Wealth);

        // Income counts every asset, unusable ones included.
        let asset_income_total = assets.iter().map(Asset::income).sum();

        let maintained: Vec<&'a Asset> =
            assets.iter().filter(|a| a.is_maintained()).collect();
        let maintenance_total = maintained.iter().map(|a| a.maintenance()).sum();

        // Zero at or below the rating ceiling, negative excess above it.
        let over = |category: Category, count: usize| -> i32 {
            (i32::from(ratings.get(category)) - count as i32).min(0)
        };

        Self {
            force_over_limit: over(Category::Force, force_assets.len()),
            cunning_over_limit: over(Category::Cunning, cunning_assets.len()),
            wealth_over_limit: over(Category::Wealth, wealth_assets.len()),
            force_assets,
            cunning_assets,
            wealth_assets,
            maintained,
            asset_income_total,
            maintenance_total,
        }
    }

    /// All assets of a category, usable or not
    pub fn assets_in(&self, category: Category) -> &[&'a Asset] {
        match category {
            Category::Force => &self.force_assets,
            Category::Cunning => &self.cunning_assets,
            Category::Wealth => &self.wealth_assets,
        }
    }

    /// Sum of income over every asset, including unusable ones
    pub fn asset_income_total(&self) -> i32 {
        self.asset_income_total
    }

    /// The assets with maintenance > 0
    pub fn maintained(&self) -> &[&'a Asset] {
        &self.maintained
    }

    /// Sum of maintenance over the maintained subset
    pub fn maintenance_total(&self) -> u32 {
        self.maintenance_total
    }

    /// Over-limit signal for one category: `min(rating - count, 0)`
    pub fn over_limit(&self, category: Category) -> i32 {
        match category {
            Category::Force => self.force_over_limit,
            Category::Cunning => self.cunning_over_limit,
            Category::Wealth => self.wealth_over_limit,
        }
    }

    /// Sum of the three over-limit signals, always <= 0
    pub fn cost_from_assets_over(&self) -> i32 {
        self.force_over_limit + self.cunning_over_limit + self.wealth_over_limit
    }
}
