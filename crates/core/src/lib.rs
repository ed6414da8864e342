pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{info, warn};

use catalog::scenarios::ScenarioCatalog;
use config::LabConfig;
use errors::CoreError;
use models::{
    challenge::{Challenge, ChallengeDraft},
    goal::{Goal, GoalDraft},
    investment::{Investment, InvestmentDraft},
    learning::LearningItem,
    scenario::Scenario,
    simulation::{Simulation, SimulationDraft},
    summary::{CumulativePoint, PortfolioSummary},
};
use services::{
    collections::{
        self, ChallengesCollection, GoalsCollection, PortfolioCollection, SimulationsCollection,
    },
    portfolio_service::PortfolioService,
    record_store::{Durability, RecordStore, WriteReceipt},
    validation,
};
use storage::{keys, memory::MemoryStore, traits::KeyValueStore};

/// Main entry point for the Invest Lab core library.
///
/// Owns one in-memory cache per collection, all backed by the same
/// key-value store. Collections are loaded once in [`InvestmentLab::open`]
/// and written back in full after every mutation.
#[must_use]
pub struct InvestmentLab {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<ScenarioCatalog>,
    portfolio: RecordStore<PortfolioCollection>,
    goals: RecordStore<GoalsCollection>,
    challenges: RecordStore<ChallengesCollection>,
    simulations: RecordStore<SimulationsCollection>,
    portfolio_service: PortfolioService,
}

impl std::fmt::Debug for InvestmentLab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestmentLab")
            .field("store", &self.store.name())
            .field("investments", &self.portfolio.len())
            .field("goals", &self.goals.len())
            .field("challenges", &self.challenges.len())
            .field("simulations", &self.simulations.len())
            .field("unpersisted", &self.has_unpersisted_changes())
            .finish()
    }
}

impl InvestmentLab {
    /// Load every collection from `store` using the built-in scenario catalog.
    pub async fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self::open_with(store, Arc::new(ScenarioCatalog::builtin()), None).await
    }

    /// Load with an explicit catalog and an optional seed for the challenge
    /// fallback pick.
    pub async fn open_with(
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<ScenarioCatalog>,
        fallback_seed: Option<u64>,
    ) -> Self {
        let portfolio = RecordStore::load(store.clone(), catalog.clone()).await;
        let goals = RecordStore::load(store.clone(), catalog.clone()).await;
        let mut challenges = RecordStore::load(store.clone(), catalog.clone()).await;
        let simulations = RecordStore::load(store.clone(), catalog.clone()).await;

        if let Some(seed) = fallback_seed {
            challenges = challenges.with_rng(StdRng::seed_from_u64(seed));
        }

        Self {
            store,
            catalog,
            portfolio,
            goals,
            challenges,
            simulations,
            portfolio_service: PortfolioService::new(),
        }
    }

    /// Build the store described by `config` and load from it.
    pub async fn open_with_config(config: &LabConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            #[cfg(not(target_arch = "wasm32"))]
            Some(dir) => Arc::new(storage::file::FileStore::open(dir)?),
            #[cfg(target_arch = "wasm32")]
            Some(_) => {
                return Err(CoreError::InvalidConfig(
                    "dataDir is not supported on wasm32".into(),
                ))
            }
            None => Arc::new(MemoryStore::new()),
        };
        Ok(Self::open_with(store, Arc::new(ScenarioCatalog::builtin()), config.fallback_seed).await)
    }

    /// Fresh lab over an empty in-memory store.
    pub async fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStore::new())).await
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Record a new holding. Newest holdings are listed first.
    pub async fn add_investment(&mut self, draft: &InvestmentDraft) -> Result<WriteReceipt, CoreError> {
        self.portfolio.create(draft).await
    }

    /// Replace a holding in place, keeping its id and list position.
    pub async fn update_investment(
        &mut self,
        id: &str,
        draft: &InvestmentDraft,
    ) -> Result<WriteReceipt, CoreError> {
        self.portfolio.update(id, draft).await
    }

    pub async fn remove_investment(&mut self, id: &str) -> WriteReceipt {
        self.portfolio.delete(id).await
    }

    #[must_use]
    pub fn get_investments(&self) -> &[Investment] {
        self.portfolio.records()
    }

    #[must_use]
    pub fn get_investment(&self, id: &str) -> Option<&Investment> {
        self.portfolio.get(id)
    }

    /// Edit-form prefill for a stored holding.
    #[must_use]
    pub fn investment_draft(&self, id: &str) -> Option<InvestmentDraft> {
        self.portfolio.get(id).map(InvestmentDraft::from)
    }

    #[must_use]
    pub fn total_portfolio_value(&self) -> f64 {
        self.portfolio_service.total_value(self.portfolio.records())
    }

    #[must_use]
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.portfolio_service.summarize(self.portfolio.records())
    }

    /// Cumulative value series for the portfolio chart, oldest first.
    #[must_use]
    pub fn portfolio_chart(&self) -> Vec<CumulativePoint> {
        self.portfolio_service.cumulative_series(self.portfolio.records())
    }

    // ── Goals ───────────────────────────────────────────────────────

    pub async fn add_goal(&mut self, draft: &GoalDraft) -> Result<WriteReceipt, CoreError> {
        self.goals.create(draft).await
    }

    pub async fn update_goal(&mut self, id: &str, draft: &GoalDraft) -> Result<WriteReceipt, CoreError> {
        self.goals.update(id, draft).await
    }

    pub async fn remove_goal(&mut self, id: &str) -> WriteReceipt {
        self.goals.delete(id).await
    }

    #[must_use]
    pub fn get_goals(&self) -> &[Goal] {
        self.goals.records()
    }

    #[must_use]
    pub fn get_goal(&self, id: &str) -> Option<&Goal> {
        self.goals.get(id)
    }

    #[must_use]
    pub fn goal_draft(&self, id: &str) -> Option<GoalDraft> {
        self.goals.get(id).map(GoalDraft::from)
    }

    /// Progress percentage for a goal, `None` if the id is unknown.
    #[must_use]
    pub fn goal_progress(&self, id: &str) -> Option<u8> {
        self.goals.get(id).map(Goal::progress_percent)
    }

    // ── Challenges ──────────────────────────────────────────────────

    /// Start a challenge. The scenario is matched from the sector name,
    /// or picked at random when nothing matches.
    pub async fn add_challenge(&mut self, draft: &ChallengeDraft) -> Result<WriteReceipt, CoreError> {
        self.challenges.create(draft).await
    }

    pub async fn update_challenge(
        &mut self,
        id: &str,
        draft: &ChallengeDraft,
    ) -> Result<WriteReceipt, CoreError> {
        self.challenges.update(id, draft).await
    }

    pub async fn remove_challenge(&mut self, id: &str) -> WriteReceipt {
        self.challenges.delete(id).await
    }

    #[must_use]
    pub fn get_challenges(&self) -> &[Challenge] {
        self.challenges.records()
    }

    #[must_use]
    pub fn get_challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.get(id)
    }

    #[must_use]
    pub fn challenge_draft(&self, id: &str) -> Option<ChallengeDraft> {
        self.challenges.get(id).map(ChallengeDraft::from)
    }

    // ── Simulations ─────────────────────────────────────────────────

    /// Compute and save a projection.
    pub async fn run_simulation(&mut self, draft: &SimulationDraft) -> Result<WriteReceipt, CoreError> {
        self.simulations.create(draft).await
    }

    /// Recompute a saved projection with new inputs, keeping its id and position.
    pub async fn update_simulation(
        &mut self,
        id: &str,
        draft: &SimulationDraft,
    ) -> Result<WriteReceipt, CoreError> {
        self.simulations.update(id, draft).await
    }

    pub async fn remove_simulation(&mut self, id: &str) -> WriteReceipt {
        self.simulations.delete(id).await
    }

    #[must_use]
    pub fn get_simulations(&self) -> &[Simulation] {
        self.simulations.records()
    }

    #[must_use]
    pub fn get_simulation(&self, id: &str) -> Option<&Simulation> {
        self.simulations.get(id)
    }

    #[must_use]
    pub fn simulation_draft(&self, id: &str) -> Option<SimulationDraft> {
        self.simulations.get(id).map(SimulationDraft::from)
    }

    /// Catalog entry behind a saved simulation. `None` when the simulation
    /// is unknown or its scenario has left the catalog.
    #[must_use]
    pub fn scenario_for_simulation(&self, id: &str) -> Option<&Scenario> {
        let sim = self.simulations.get(id)?;
        self.catalog.by_id(&sim.scenario_id)
    }

    /// Projected value for the given input without saving anything.
    pub fn preview_projection(&self, draft: &SimulationDraft) -> Result<f64, CoreError> {
        let fields = validation::validate_simulation(draft)?;
        let (_, value) = collections::simulation_projection(&self.catalog, &fields)?;
        Ok(value)
    }

    // ── Static Content ──────────────────────────────────────────────

    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        self.catalog.all()
    }

    #[must_use]
    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.catalog.by_id(id)
    }

    #[must_use]
    pub fn learning_items(&self) -> Vec<LearningItem> {
        catalog::learning::learning_items()
    }

    // ── Onboarding & Reset ──────────────────────────────────────────

    /// Whether onboarding finished. Unreadable flags count as not finished.
    pub async fn is_onboarding_complete(&self) -> bool {
        match storage::traits::get_json::<bool>(self.store.as_ref(), keys::ONBOARDING_COMPLETE).await {
            Ok(flag) => flag.unwrap_or(false),
            Err(e) => {
                warn!(error = %e, "Failed to read onboarding flag");
                false
            }
        }
    }

    pub async fn complete_onboarding(&self) -> Durability {
        match storage::traits::set_json(self.store.as_ref(), keys::ONBOARDING_COMPLETE, &true).await {
            Ok(()) => {
                info!("Onboarding completed");
                Durability::Persisted
            }
            Err(e) => {
                warn!(error = %e, "Failed to save onboarding flag");
                Durability::Failed(e.to_string())
            }
        }
    }

    /// Wipe every slot in one store call and empty all caches.
    /// Caches are kept if the wipe fails.
    pub async fn reset_all_data(&mut self) -> Durability {
        match self.store.clear().await {
            Ok(()) => {
                self.portfolio.invalidate();
                self.goals.invalidate();
                self.challenges.invalidate();
                self.simulations.invalidate();
                info!(store = self.store.name(), "All app data deleted");
                Durability::Persisted
            }
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Failed to wipe app data");
                Durability::Failed(e.to_string())
            }
        }
    }

    /// Re-read every collection from the store, dropping unsaved memory state.
    pub async fn reload(&mut self) {
        self.portfolio.reload().await;
        self.goals.reload().await;
        self.challenges.reload().await;
        self.simulations.reload().await;
    }

    /// `true` if any collection holds changes its last write failed to save.
    #[must_use]
    pub fn has_unpersisted_changes(&self) -> bool {
        self.portfolio.has_unpersisted_changes()
            || self.goals.has_unpersisted_changes()
            || self.challenges.has_unpersisted_changes()
            || self.simulations.has_unpersisted_changes()
    }

    // ── Collection Access ───────────────────────────────────────────

    pub fn portfolio(&self) -> &RecordStore<PortfolioCollection> {
        &self.portfolio
    }

    pub fn goals(&self) -> &RecordStore<GoalsCollection> {
        &self.goals
    }

    pub fn challenges(&self) -> &RecordStore<ChallengesCollection> {
        &self.challenges
    }

    pub fn simulations(&self) -> &RecordStore<SimulationsCollection> {
        &self.simulations
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}
