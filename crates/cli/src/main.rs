//! Suzerain CLI - Command-line host for the faction engine
//!
//! Usage:
//!   suzerain --roster <file> list
//!   suzerain --roster <file> status <faction>
//!   suzerain --roster <file> turn <faction>
//!   suzerain --roster <file> rating-up <faction> <category>
//!   suzerain --roster <file> set-goal <faction> <goal>
//!   suzerain --roster <file> set-homeworld <faction> <reference-id>

mod hosts;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use console::style;

use hosts::{ConsoleNotices, ConsoleReports, DialoguerConfirm, RosterLookup};
use shared::EngineConfig;
use suzerain_adapter::{InMemoryFactionStore, Roster};
use suzerain_core::FactionEngine;
use suzerain_domain::model::category::Category;
use suzerain_domain::model::faction::{Faction, FactionId};

#[derive(Parser)]
#[command(name = "suzerain")]
#[command(about = "Suzerain - faction turn resolution and progression engine")]
#[command(version)]
struct Cli {
    /// Roster file with the factions in play
    #[arg(short, long, global = true, default_value = "roster.json")]
    roster: PathBuf,

    /// Optional engine configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the factions in the roster
    List,
    /// Show one faction's ratings, resources, and assets
    Status { faction: String },
    /// Resolve one full turn for a faction
    Turn { faction: String },
    /// Spend XP to raise a rating by one level
    RatingUp { faction: String, category: Category },
    /// Set a faction's goal
    SetGoal { faction: String, goal: String },
    /// Set a faction's homeworld from a roster reference
    SetHomeworld { faction: String, reference_id: String },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let roster = Roster::from_file(&cli.roster)
        .with_context(|| format!("Failed to load roster {}", cli.roster.display()))?;
    let mut store = InMemoryFactionStore::new();
    let seeded = roster.seed(&mut store)?;
    tracing::debug!(factions = seeded.len(), "roster seeded");

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let mut engine = FactionEngine::new(
        store,
        Arc::new(DialoguerConfirm),
        Arc::new(ConsoleNotices),
        Arc::new(ConsoleReports),
        Arc::new(RosterLookup::from_roster(&roster)),
        config,
    );

    match cli.command {
        Commands::List => {
            for faction in engine.factions()? {
                println!(
                    "{}  {}",
                    style(faction.name()).bold(),
                    style(faction.id()).dim()
                );
            }
        }
        Commands::Status { faction } => {
            let id = resolve(&engine, &faction)?;
            if let Some(faction) = engine.faction(&id)? {
                print_status(&faction);
            }
        }
        Commands::Turn { faction } => {
            let id = resolve(&engine, &faction)?;
            engine.start_turn(&id)?;
        }
        Commands::RatingUp { faction, category } => {
            let id = resolve(&engine, &faction)?;
            engine.rating_up(&id, category)?;
        }
        Commands::SetGoal { faction, goal } => {
            let id = resolve(&engine, &faction)?;
            engine.set_goal(&id, &goal)?;
        }
        Commands::SetHomeworld {
            faction,
            reference_id,
        } => {
            let id = resolve(&engine, &faction)?;
            engine.set_homeworld(&id, &reference_id)?;
        }
    }

    Ok(())
}

/// Resolve a command-line selector to a faction id, matching the id
/// exactly or the name case-insensitively
fn resolve(
    engine: &FactionEngine<InMemoryFactionStore>,
    selector: &str,
) -> anyhow::Result<FactionId> {
    let factions = engine.factions()?;
    let found = factions.iter().find(|f| {
        f.id().as_str() == selector || f.name().eq_ignore_ascii_case(selector)
    });
    match found {
        Some(faction) => Ok(faction.id().clone()),
        None => bail!("No faction matches '{}'", selector),
    }
}

fn print_status(faction: &Faction) {
    println!("{}", style(faction.name()).bold());
    println!(
        "  force {}  cunning {}  wealth {}",
        faction.rating(Category::Force),
        faction.rating(Category::Cunning),
        faction.rating(Category::Wealth),
    );
    println!(
        "  credits {}  xp {}  health {}/{}",
        faction.credits(),
        faction.xp(),
        faction.health().value,
        faction.health().max,
    );
    println!(
        "  goal: {}  homeworld: {}",
        faction.goal().unwrap_or("(none)"),
        faction.homeworld().unwrap_or("(none)"),
    );
    for asset in faction.assets() {
        let flag = if asset.unusable() { " [unusable]" } else { "" };
        println!(
            "  - {} ({}) income {} upkeep {}{}",
            asset.name(),
            asset.category(),
            asset.income(),
            asset.maintenance(),
            flag,
        );
    }
}
