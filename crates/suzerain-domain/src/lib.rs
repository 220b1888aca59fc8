//! # Suzerain Domain Layer
//!
//! The heart of suzerain - pure faction rules logic with zero external
//! dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Entities & Value Objects                        ││
//! │  │  store/   - Trait definition (not implementations)          ││
//! │  │  service/ - Domain services (ledger, derived stats,         ││
//! │  │             turn resolution, rating progression)            ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If the host UI changes, this crate doesn't change.
//! If persistence moves from memory to a database, this crate doesn't
//! change.

pub mod model;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use model::{
    asset::{Asset, AssetId, AssetPatch},
    category::Category,
    faction::{Faction, FactionError, FactionId, FactionPatch, Health},
    rating::{rating_table, RatingOutOfRange, Ratings, MAX_RATING},
};

pub use service::{
    derived::DerivedStats,
    ledger::AssetLedger,
    progression::{ProgressionOutcome, RatingProgression},
    turn::{IncomeBreakdown, Remediation, TurnOpening, TurnOutcome, TurnResolver},
};

pub use store::{FactionStore, StoreError};
