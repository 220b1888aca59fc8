//! Domain Services - Rules logic that doesn't belong to a single entity
//!
//! Services operate on the aggregate and contain the "verbs" of the
//! domain: tallying the asset ledger, refreshing derived stats,
//! resolving a turn, and spending XP on rating progression.

pub mod derived;
pub mod ledger;
pub mod progression;
pub mod turn;
