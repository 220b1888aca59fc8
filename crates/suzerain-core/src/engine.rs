//! FactionEngine - The central orchestrator
//!
//! Drives one faction at a time through the domain services: turn
//! resolution, rating progression, goal and homeworld changes. All
//! host interaction goes through the injected collaborator ports; all
//! persistence goes through the store port as field patches.
//!
//! Callers must serialize invocations per faction - running two turns
//! for the same faction concurrently would double-apply income.

use std::sync::Arc;

use shared::{
    EngineConfig, InsufficientXpError, RatingCapError, ReferenceNotFoundError, Result,
    SuzerainError,
};
use suzerain_domain::model::asset::{AssetId, AssetPatch};
use suzerain_domain::model::category::Category;
use suzerain_domain::model::faction::{Faction, FactionId, FactionPatch};
use suzerain_domain::service::progression::{ProgressionOutcome, RatingProgression};
use suzerain_domain::service::turn::{Remediation, TurnOpening, TurnResolver};
use suzerain_domain::store::{FactionStore, StoreError};

use crate::host::{Audience, ConfirmPrompt, NoticeChannel, ReferenceLookup, ReportChannel};
use crate::report::render_turn_report;

/// The central orchestrator, generic over the store implementation
pub struct FactionEngine<S: FactionStore> {
    store: S,
    confirm: Arc<dyn ConfirmPrompt>,
    notices: Arc<dyn NoticeChannel>,
    reports: Arc<dyn ReportChannel>,
    lookup: Arc<dyn ReferenceLookup>,
    config: EngineConfig,
    resolver: TurnResolver,
    progression: RatingProgression,
}

impl<S: FactionStore> FactionEngine<S> {
    /// Create a new engine around a store and the host collaborators
    pub fn new(
        store: S,
        confirm: Arc<dyn ConfirmPrompt>,
        notices: Arc<dyn NoticeChannel>,
        reports: Arc<dyn ReportChannel>,
        lookup: Arc<dyn ReferenceLookup>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            confirm,
            notices,
            reports,
            lookup,
            config,
            resolver: TurnResolver::new(),
            progression: RatingProgression::new(),
        }
    }

    /// Load a faction for display
    pub fn faction(&self, id: &FactionId) -> Result<Option<Faction>> {
        self.store
            .load(id)
            .map_err(|e| SuzerainError::Other(e.to_string()))
    }

    /// List every faction in the store
    pub fn factions(&self) -> Result<Vec<Faction>> {
        self.store
            .list()
            .map_err(|e| SuzerainError::Other(e.to_string()))
    }

    /// Resolve one full turn for a faction.
    ///
    /// Goal handling first: an unset goal invites a choice and the turn
    /// continues; a set goal raises the abandon confirmation, and an
    /// "abandon" answer forfeits the whole turn - no income, no
    /// maintenance, no credit commit.
    pub fn start_turn(&mut self, id: &FactionId) -> Result<()> {
        let Some(faction) = self.load_or_notify(id)? else {
            return Ok(());
        };

        match self.resolver.open(&faction) {
            TurnOpening::GoalRequired => {
                self.notices.info(&format!(
                    "{} has no goal - choose one for this turn",
                    faction.name()
                ));
            }
            TurnOpening::ConfirmAbandon { goal } => {
                let prompt = format!("Abandon goal: {}?", goal);
                if self.confirm.confirm(&prompt, &prompt) {
                    self.commit_faction(id, &FactionPatch::clear_goal())?;
                    self.notices.info(&format!(
                        "{} abandons '{}' - this turn's income is forfeit",
                        faction.name(),
                        goal
                    ));
                    tracing::info!(faction = faction.name(), "goal abandoned, turn forfeit");
                    return Ok(());
                }
            }
        }

        let outcome = self.resolver.resolve_economy(&faction);
        tracing::info!(
            faction = faction.name(),
            net_income = outcome.income.net(),
            credits = outcome.credits,
            "turn economy resolved"
        );

        if let Remediation::ForcedDisable { disabled, refunded } = &outcome.remediation {
            let patches: Vec<_> = disabled
                .iter()
                .map(|asset_id| (asset_id.clone(), AssetPatch::unusable()))
                .collect();
            self.commit_assets(id, &patches)?;
            tracing::warn!(
                faction = faction.name(),
                disabled = disabled.len(),
                refunded,
                "maintained assets forcibly disabled"
            );
        }

        // Committed unconditionally, negative or not.
        self.commit_faction(id, &FactionPatch::credits(outcome.credits))?;

        let body = render_turn_report(faction.name(), &outcome);
        self.reports
            .broadcast(&self.config.report_speaker, &body, Audience::GameMasters);
        Ok(())
    }

    /// Spend XP to raise one rating by one level
    pub fn rating_up(&mut self, id: &FactionId, category: Category) -> Result<()> {
        let Some(mut faction) = self.load_or_notify(id)? else {
            return Ok(());
        };

        match self.progression.rating_up(&mut faction, category) {
            ProgressionOutcome::AtMax { category, level } => {
                self.notices.error(
                    &RatingCapError {
                        category: category.display_name().to_string(),
                        level,
                    }
                    .to_string(),
                );
            }
            ProgressionOutcome::OutOfTable => {
                // Deliberately silent; see DESIGN.md, open questions.
                tracing::debug!(
                    faction = faction.name(),
                    category = %category,
                    "rating target outside table, no-op"
                );
            }
            ProgressionOutcome::InsufficientXp { have, need } => {
                self.notices
                    .error(&InsufficientXpError { have, need }.to_string());
            }
            ProgressionOutcome::Raised {
                category,
                level,
                remaining_xp,
            } => {
                self.commit_faction(
                    id,
                    &FactionPatch::rating_raise(category, level, remaining_xp),
                )?;
                self.notices.info(&format!(
                    "Raised {} rating to {} ({} xp remaining)",
                    category, level, remaining_xp
                ));
            }
        }
        Ok(())
    }

    /// Set a faction's goal
    pub fn set_goal(&mut self, id: &FactionId, goal: &str) -> Result<()> {
        let Some(faction) = self.load_or_notify(id)? else {
            return Ok(());
        };
        self.commit_faction(id, &FactionPatch::goal(goal))?;
        self.notices
            .info(&format!("{} now pursues '{}'", faction.name(), goal));
        Ok(())
    }

    /// Set a faction's homeworld from a reference record, after
    /// confirmation
    pub fn set_homeworld(&mut self, id: &FactionId, reference_id: &str) -> Result<()> {
        let Some(faction) = self.load_or_notify(id)? else {
            return Ok(());
        };

        let Some(record) = self.lookup.lookup(reference_id) else {
            self.notices.error(
                &ReferenceNotFoundError {
                    reference_id: reference_id.to_string(),
                }
                .to_string(),
            );
            return Ok(());
        };

        let prompt = format!("Set homeworld: {}?", record.name);
        if !self.confirm.confirm(&prompt, &prompt) {
            return Ok(());
        }

        self.commit_faction(id, &FactionPatch::homeworld(&record.name))?;
        self.notices.info(&format!(
            "{} homeworld set to {}",
            faction.name(),
            record.name
        ));
        Ok(())
    }

    /// Load a faction, emitting an error notice when it is missing
    fn load_or_notify(&self, id: &FactionId) -> Result<Option<Faction>> {
        let faction = self
            .store
            .load(id)
            .map_err(|e| SuzerainError::Other(e.to_string()))?;
        if faction.is_none() {
            self.notices
                .error(&format!("No faction with id '{}'", id.as_str()));
        }
        Ok(faction)
    }

    fn commit_faction(&mut self, id: &FactionId, patch: &FactionPatch) -> Result<()> {
        self.store
            .commit_faction(id, patch)
            .map_err(|e| self.commit_failure(e))
    }

    fn commit_assets(
        &mut self,
        id: &FactionId,
        patches: &[(AssetId, AssetPatch)],
    ) -> Result<()> {
        self.store
            .commit_assets(id, patches)
            .map_err(|e| self.commit_failure(e))
    }

    /// A rejected commit is terminal for the current operation: no
    /// partial state is assumed persisted and nothing is retried.
    fn commit_failure(&self, err: StoreError) -> SuzerainError {
        let err = SuzerainError::Commit(err.to_string());
        self.notices.error(&err.to_string());
        err
    }
}
