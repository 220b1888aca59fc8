//! Console implementations of the engine's collaborator ports
//!
//! The confirmation prompt blocks on stdin; notices and reports go to
//! the terminal. Reports mark their restricted audience explicitly so
//! a table running over screen-share knows to look away.

use std::collections::HashMap;

use console::style;
use dialoguer::Confirm;

use suzerain_adapter::Roster;
use suzerain_core::host::{
    Audience, ConfirmPrompt, NoticeChannel, ReferenceLookup, ReferenceRecord, ReportChannel,
};

/// Blocking yes/no prompt via dialoguer.
///
/// An interrupted prompt (Ctrl-C, closed stdin) maps to "no" so the
/// engine always receives one of the two outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirm;

impl ConfirmPrompt for DialoguerConfirm {
    fn confirm(&self, title: &str, _content: &str) -> bool {
        Confirm::new()
            .with_prompt(title)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Notices styled for the acting user
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotices;

impl NoticeChannel for ConsoleNotices {
    fn info(&self, message: &str) {
        println!("{} {}", style("info:").cyan().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", style("error:").red().bold(), message);
    }
}

/// Turn reports printed with their speaker and audience
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReports;

impl ReportChannel for ConsoleReports {
    fn broadcast(&self, speaker: &str, content: &str, audience: Audience) {
        let audience_label = match audience {
            Audience::GameMasters => "GM only",
        };
        println!(
            "\n{} {}",
            style(speaker).green().bold(),
            style(format!("({})", audience_label)).dim()
        );
        for line in content.lines() {
            println!("  {}", line);
        }
        println!();
    }
}

/// Reference lookup over the roster's reference records
#[derive(Debug, Clone, Default)]
pub struct RosterLookup {
    records: HashMap<String, String>,
}

impl RosterLookup {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            records: roster
                .references
                .iter()
                .map(|r| (r.id.clone(), r.name.clone()))
                .collect(),
        }
    }
}

impl ReferenceLookup for RosterLookup {
    fn lookup(&self, id: &str) -> Option<ReferenceRecord> {
        self.records.get(id).map(|name| ReferenceRecord {
            id: id.to_string(),
            name: name.clone(),
        })
    }
}
