//! Host collaborator ports
//!
//! Contracts only - the host (a CLI, a VTT bridge, a test double)
//! supplies the implementations. The engine holds these as trait
//! objects injected at construction, never as globals.

/// Who may see a broadcast report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// The game-master overseers only, never the general audience
    GameMasters,
}

/// A record resolved by the reference lookup (a homeworld candidate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub id: String,
    pub name: String,
}

/// Yes/no confirmation, blocking the turn until answered.
///
/// A dismissed or interrupted prompt must still map to one of the two
/// outcomes; the engine assumes exactly one answer is always delivered.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, title: &str, content: &str) -> bool;
}

/// Ephemeral notices addressed to the acting user
pub trait NoticeChannel: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Persistent reports visible to a restricted audience
pub trait ReportChannel: Send + Sync {
    fn broadcast(&self, speaker: &str, content: &str, audience: Audience);
}

/// Resolve a reference id to a record, if one exists
pub trait ReferenceLookup: Send + Sync {
    fn lookup(&self, id: &str) -> Option<ReferenceRecord>;
}
