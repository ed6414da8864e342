use crate::catalog::scenarios::ScenarioCatalog;
use crate::errors::CoreError;
use crate::models::challenge::{Challenge, ChallengeDraft, ChallengeFields};
use crate::models::goal::{Goal, GoalDraft, GoalFields};
use crate::models::investment::{Investment, InvestmentDraft, InvestmentFields};
use crate::models::scenario::Scenario;
use crate::models::simulation::{Simulation, SimulationDraft, SimulationFields};
use crate::storage::keys;

use super::projection::{finite_projection, one_period_value, project};
use super::record_store::{Collection, DeriveContext};
use super::validation;

/// Format of the timestamp stamped on simulations.
pub const SIMULATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Catalog scenario and projected value for validated simulation input.
/// Saving and previewing both go through here.
pub(crate) fn simulation_projection<'a>(
    catalog: &'a ScenarioCatalog,
    fields: &SimulationFields,
) -> Result<(&'a Scenario, f64), CoreError> {
    let scenario = catalog
        .by_id(&fields.scenario_id)
        .ok_or_else(|| CoreError::ScenarioNotFound(fields.scenario_id.clone()))?;
    let value = finite_projection(project(
        fields.amount,
        scenario.historical_return,
        fields.years,
    ))?;
    Ok((scenario, value))
}

/// Portfolio holdings. No derived fields.
pub struct PortfolioCollection;

impl Collection for PortfolioCollection {
    const KEY: &'static str = keys::PORTFOLIO;
    type Record = Investment;
    type Draft = InvestmentDraft;
    type Fields = InvestmentFields;

    fn record_id(record: &Investment) -> &str {
        &record.id
    }

    fn validate(draft: &InvestmentDraft) -> Result<InvestmentFields, CoreError> {
        validation::validate_investment(draft)
    }

    fn derive(
        id: String,
        fields: InvestmentFields,
        _ctx: &mut DeriveContext<'_>,
    ) -> Result<Investment, CoreError> {
        Ok(Investment {
            id,
            kind: fields.kind,
            name: fields.name,
            amount: fields.amount,
            date: fields.date,
            notes: fields.notes,
        })
    }
}

/// Savings goals. Progress is computed on read, not stored.
pub struct GoalsCollection;

impl Collection for GoalsCollection {
    const KEY: &'static str = keys::GOALS;
    type Record = Goal;
    type Draft = GoalDraft;
    type Fields = GoalFields;

    fn record_id(record: &Goal) -> &str {
        &record.id
    }

    fn validate(draft: &GoalDraft) -> Result<GoalFields, CoreError> {
        validation::validate_goal(draft)
    }

    fn derive(id: String, fields: GoalFields, _ctx: &mut DeriveContext<'_>) -> Result<Goal, CoreError> {
        Ok(Goal {
            id,
            name: fields.name,
            target_amount: fields.target_amount,
            current_amount: fields.current_amount,
            target_date: fields.target_date,
            notes: fields.notes,
        })
    }
}

/// Sector challenges: one period at the matched scenario's return.
pub struct ChallengesCollection;

impl Collection for ChallengesCollection {
    const KEY: &'static str = keys::CHALLENGES;
    type Record = Challenge;
    type Draft = ChallengeDraft;
    type Fields = ChallengeFields;

    fn record_id(record: &Challenge) -> &str {
        &record.id
    }

    fn validate(draft: &ChallengeDraft) -> Result<ChallengeFields, CoreError> {
        validation::validate_challenge(draft)
    }

    fn derive(
        id: String,
        fields: ChallengeFields,
        ctx: &mut DeriveContext<'_>,
    ) -> Result<Challenge, CoreError> {
        let scenario = ctx.catalog.select_for_sector(&fields.sector, &mut *ctx.rng)?;
        let simulated_return =
            finite_projection(one_period_value(fields.amount, scenario.historical_return))?;
        Ok(Challenge {
            id,
            name: fields.name,
            sector: fields.sector,
            amount: fields.amount,
            start_date: fields.start_date,
            simulated_return,
            scenario_name: scenario.name.clone(),
        })
    }
}

/// Saved multi-year projections against a catalog scenario.
pub struct SimulationsCollection;

impl Collection for SimulationsCollection {
    const KEY: &'static str = keys::SIMULATIONS;
    type Record = Simulation;
    type Draft = SimulationDraft;
    type Fields = SimulationFields;

    fn record_id(record: &Simulation) -> &str {
        &record.id
    }

    fn validate(draft: &SimulationDraft) -> Result<SimulationFields, CoreError> {
        validation::validate_simulation(draft)
    }

    fn derive(
        id: String,
        fields: SimulationFields,
        ctx: &mut DeriveContext<'_>,
    ) -> Result<Simulation, CoreError> {
        let (scenario, projected_return) = simulation_projection(ctx.catalog, &fields)?;
        Ok(Simulation {
            id,
            scenario_id: scenario.id.clone(),
            scenario_name: scenario.name.clone(),
            amount: fields.amount,
            years: fields.years,
            projected_return,
            date: ctx.now.format(SIMULATION_DATE_FORMAT).to_string(),
        })
    }
}
