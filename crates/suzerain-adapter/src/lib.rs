//! # Suzerain Adapter Layer
//!
//! Implementations of the domain's store port plus roster loading:
//! the pieces that talk to the world outside the rules logic.

pub mod roster;
pub mod store;

pub use roster::{Roster, RosterError};
pub use store::in_memory::InMemoryFactionStore;
