//! # Suzerain Core
//!
//! The orchestration layer: collaborator ports into the surrounding
//! host (confirmation prompt, notice channel, report channel, reference
//! lookup) and the `FactionEngine` that drives the domain services
//! through them. The engine owns no rules of its own - it loads,
//! delegates to the domain, commits, and reports.

pub mod engine;
pub mod host;
pub mod report;

pub use engine::FactionEngine;
pub use host::{Audience, ConfirmPrompt, NoticeChannel, ReferenceLookup, ReferenceRecord, ReportChannel};
