//! RatingProgression - Spend XP to raise one rating by one level
//!
//! The XP pool is shared across all three ratings; the cost of the next
//! level comes from the rating table. Expected outcomes (already at the
//! cap, not enough XP) are explicit branches, not errors - the engine
//! turns them into notices.

use crate::model::category::Category;
use crate::model::faction::Faction;
use crate::model::rating::{rating_table, MAX_RATING};

/// The result of one progression attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionOutcome {
    /// The rating is already at the cap; nothing mutated
    AtMax { category: Category, level: u8 },
    /// The target level falls outside the table. Unreachable while the
    /// cap check holds, preserved as a silent no-op; see DESIGN.md,
    /// open questions.
    OutOfTable,
    /// The XP pool cannot cover the next level; nothing mutated
    InsufficientXp { have: u32, need: u32 },
    /// Rating raised and XP spent, both fields mutated together
    Raised {
        category: Category,
        level: u8,
        remaining_xp: u32,
    },
}

/// Stateless rating progression service
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingProgression;

impl RatingProgression {
    pub fn new() -> Self {
        Self
    }

    /// Try to raise one rating by one level, spending XP
    pub fn rating_up(&self, faction: &mut Faction, category: Category) -> ProgressionOutcome {
        let level = faction.rating(category);
        if level == MAX_RATING {
            return ProgressionOutcome::AtMax { category, level };
        }

        let target = level + 1;
        let need = rating_table(target);
        if need == 0 {
            // Out-of-table lookup; every in-domain level has a positive
            // cost, so zero means the target fell outside 1..=8.
            return ProgressionOutcome::OutOfTable;
        }

        let have = faction.xp();
        if have < need {
            return ProgressionOutcome::InsufficientXp { have, need };
        }

        let remaining_xp = have - need;
        if faction.set_rating(category, target).is_err() {
            // target <= MAX_RATING by construction
            return ProgressionOutcome::OutOfTable;
        }
        faction.set_xp(remaining_xp);

        ProgressionOutcome::Raised {
            category,
            level: target,
            remaining_xp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::faction::FactionId;
    use crate::model::rating::Ratings;

    fn faction(force: u8, xp: u32) -> Faction {
        Faction::new(FactionId::new("f-001"), "Harmonious Vox")
            .with_ratings(Ratings::new(force, 0, 0).unwrap())
            .with_xp(xp)
    }

    #[test]
    fn test_at_max_never_mutates() {
        let mut f = faction(8, 50);
        let outcome = RatingProgression::new().rating_up(&mut f, Category::Force);

        assert_eq!(
            outcome,
            ProgressionOutcome::AtMax {
                category: Category::Force,
                level: 8
            }
        );
        assert_eq!(f.rating(Category::Force), 8);
        assert_eq!(f.xp(), 50);
    }

    #[test]
    fn test_insufficient_xp_never_mutates() {
        // Reaching level 3 costs 4.
        let mut f = faction(2, 3);
        let outcome = RatingProgression::new().rating_up(&mut f, Category::Force);

        assert_eq!(outcome, ProgressionOutcome::InsufficientXp { have: 3, need: 4 });
        assert_eq!(f.rating(Category::Force), 2);
        assert_eq!(f.xp(), 3);
    }

    #[test]
    fn test_exact_xp_succeeds_and_empties_pool() {
        let mut f = faction(2, rating_table(3));
        let outcome = RatingProgression::new().rating_up(&mut f, Category::Force);

        assert_eq!(
            outcome,
            ProgressionOutcome::Raised {
                category: Category::Force,
                level: 3,
                remaining_xp: 0
            }
        );
        assert_eq!(f.rating(Category::Force), 3);
        assert_eq!(f.xp(), 0);
    }

    #[test]
    fn test_raise_from_zero() {
        // An absent rating reads as 0; the first level costs 1.
        let mut f = faction(0, 10);
        let outcome = RatingProgression::new().rating_up(&mut f, Category::Force);

        assert_eq!(
            outcome,
            ProgressionOutcome::Raised {
                category: Category::Force,
                level: 1,
                remaining_xp: 9
            }
        );
    }

    #[test]
    fn test_raise_refreshes_derived_health() {
        let mut f = faction(0, 1);
        let before = f.health().max;
        RatingProgression::new().rating_up(&mut f, Category::Force);
        assert_eq!(f.health().max, before + rating_table(1));
    }
}
