use rand::seq::SliceRandom;
use rand::RngCore;

use crate::errors::CoreError;
use crate::models::scenario::{RiskLevel, Scenario, ScenarioType};

/// Immutable list of investment scenarios.
///
/// Iteration order is declaration order; sector matching relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Build a catalog from an explicit list (tests, alternative content packs).
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// The scenarios shipped with the app.
    pub fn builtin() -> Self {
        Self::new(vec![
            Scenario::new(
                "stock1",
                ScenarioType::Stock,
                "Blue Chip Stocks",
                "Large, established companies with a history of reliable performance.",
                8.0,
                RiskLevel::Medium,
            ),
            Scenario::new(
                "stock2",
                ScenarioType::Stock,
                "Tech Growth Stocks",
                "Technology companies with high growth potential but higher volatility.",
                12.0,
                RiskLevel::High,
            ),
            Scenario::new(
                "realestate1",
                ScenarioType::RealEstate,
                "Residential Real Estate",
                "Investing in homes and apartments for rental income and appreciation.",
                6.0,
                RiskLevel::Medium,
            ),
            Scenario::new(
                "bond1",
                ScenarioType::Bond,
                "Government Bonds",
                "Low-risk bonds issued by the government.",
                3.0,
                RiskLevel::Low,
            ),
            Scenario::new(
                "mutual1",
                ScenarioType::MutualFund,
                "Index Fund",
                "A fund that tracks a market index, offering broad diversification.",
                7.0,
                RiskLevel::Medium,
            ),
        ])
    }

    #[must_use]
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Exact id lookup.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn by_type(&self, kind: ScenarioType) -> Vec<&Scenario> {
        self.scenarios.iter().filter(|s| s.kind == kind).collect()
    }

    #[must_use]
    pub fn by_risk(&self, risk: RiskLevel) -> Vec<&Scenario> {
        self.scenarios.iter().filter(|s| s.risk_level == risk).collect()
    }

    /// First scenario whose name contains `sector` (case-insensitive).
    /// A blank sector never matches.
    #[must_use]
    pub fn match_sector(&self, sector: &str) -> Option<&Scenario> {
        let needle = sector.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.scenarios
            .iter()
            .find(|s| s.name.to_lowercase().contains(&needle))
    }

    /// Scenario for a challenge sector: the substring match if there is one,
    /// otherwise a uniformly random pick drawn from `rng`.
    pub fn select_for_sector<R>(&self, sector: &str, rng: &mut R) -> Result<&Scenario, CoreError>
    where
        R: RngCore + ?Sized,
    {
        if let Some(found) = self.match_sector(sector) {
            return Ok(found);
        }
        self.scenarios.choose(rng).ok_or(CoreError::EmptyCatalog)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
