use serde::{Deserialize, Serialize};

/// A saved compound-growth projection for one catalog scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: String,
    pub scenario_id: String,
    pub scenario_name: String,
    pub amount: f64,
    pub years: u32,
    /// `amount * (1 + rate/100)^years`, fixed at create/edit time
    pub projected_return: f64,
    /// When the projection was last computed
    pub date: String,
}

/// Raw form input for a [`Simulation`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationDraft {
    pub scenario_id: String,
    pub amount: String,
    pub years: String,
}

impl SimulationDraft {
    pub fn new(
        scenario_id: impl Into<String>,
        amount: impl Into<String>,
        years: impl Into<String>,
    ) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            amount: amount.into(),
            years: years.into(),
        }
    }
}

impl From<&Simulation> for SimulationDraft {
    fn from(sim: &Simulation) -> Self {
        Self {
            scenario_id: sim.scenario_id.clone(),
            amount: sim.amount.to_string(),
            years: sim.years.to_string(),
        }
    }
}

/// Validated simulation fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationFields {
    pub scenario_id: String,
    pub amount: f64,
    pub years: u32,
}
