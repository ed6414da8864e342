use serde::{Deserialize, Serialize};

/// Sector labels offered when starting a challenge.
pub const SECTORS: [&str; 5] = ["Tech", "Real Estate", "Bonds", "Index Fund", "Other"];

/// A one-year "what if" bet on a sector.
///
/// `simulated_return` and `scenario_name` are derived when the challenge is
/// created or edited and stored alongside the user's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub amount: f64,
    pub start_date: String,
    /// Value after one period at the matched scenario's historical return
    pub simulated_return: f64,
    /// Name of the scenario used for the derivation
    pub scenario_name: String,
}

/// Raw form input for a [`Challenge`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeDraft {
    pub name: String,
    pub sector: String,
    pub amount: String,
    pub start_date: String,
}

impl ChallengeDraft {
    pub fn new(
        name: impl Into<String>,
        sector: impl Into<String>,
        amount: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
            amount: amount.into(),
            start_date: start_date.into(),
        }
    }
}

impl Default for ChallengeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sector: SECTORS[0].to_string(),
            amount: String::new(),
            start_date: String::new(),
        }
    }
}

impl From<&Challenge> for ChallengeDraft {
    fn from(c: &Challenge) -> Self {
        Self {
            name: c.name.clone(),
            sector: c.sector.clone(),
            amount: c.amount.to_string(),
            start_date: c.start_date.clone(),
        }
    }
}

/// Validated challenge fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeFields {
    pub name: String,
    pub sector: String,
    pub amount: f64,
    pub start_date: String,
}
