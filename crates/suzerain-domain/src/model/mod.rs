//! Domain Models - The vocabulary of suzerain
//!
//! These types represent the "Ubiquitous Language" of the faction game.
//! Every name here should match how the table talks about the system.

pub mod asset;
pub mod category;
pub mod faction;
pub mod rating;
