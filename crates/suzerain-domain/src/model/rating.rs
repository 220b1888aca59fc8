//! Ratings - The three capability scores of a faction
//!
//! Each rating runs 0..=8 and gates both the faction's asset capacity in
//! that category and its maximum health. A single sparse table maps a
//! level to the XP cost of *reaching* it and the health contributed *at*
//! it - the same numbers serve both purposes.

use super::category::Category;

/// Highest attainable rating level
pub const MAX_RATING: u8 = 8;

/// XP cost to reach a level / health contribution at that level.
///
/// Levels outside 1..=8 (including 0) yield 0. The out-of-domain default
/// is explicit here, not a "key absent" check.
pub fn rating_table(level: u8) -> u32 {
    match level {
        1 => 1,
        2 => 2,
        3 => 4,
        4 => 6,
        5 => 9,
        6 => 12,
        7 => 16,
        8 => 20,
        _ => 0,
    }
}

/// The three independent ratings of a faction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratings {
    force: u8,
    cunning: u8,
    wealth: u8,
}

impl Ratings {
    /// Create ratings, rejecting any level above the cap
    pub fn new(force: u8, cunning: u8, wealth: u8) -> Result<Self, RatingOutOfRange> {
        let mut ratings = Self::default();
        ratings.set(Category::Force, force)?;
        ratings.set(Category::Cunning, cunning)?;
        ratings.set(Category::Wealth, wealth)?;
        Ok(ratings)
    }

    /// Get the rating for a category
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Force => self.force,
            Category::Cunning => self.cunning,
            Category::Wealth => self.wealth,
        }
    }

    /// Set the rating for a category, rejecting levels above the cap
    pub fn set(&mut self, category: Category, level: u8) -> Result<(), RatingOutOfRange> {
        if level > MAX_RATING {
            return Err(RatingOutOfRange { category, level });
        }
        match category {
            Category::Force => self.force = level,
            Category::Cunning => self.cunning = level,
            Category::Wealth => self.wealth = level,
        }
        Ok(())
    }
}

/// Error returned when a rating level falls outside 0..=8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOutOfRange {
    pub category: Category,
    pub level: u8,
}

impl core::fmt::Display for RatingOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} rating {} is outside 0..={}",
            self.category, self.level, MAX_RATING
        )
    }
}

impl std::error::Error for RatingOutOfRange {}
