use serde::{Deserialize, Serialize};

/// Classification of an investment scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    Stock,
    RealEstate,
    Bond,
    MutualFund,
}

impl std::fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioType::Stock => write!(f, "Stock"),
            ScenarioType::RealEstate => write!(f, "Real Estate"),
            ScenarioType::Bond => write!(f, "Bond"),
            ScenarioType::MutualFund => write!(f, "Mutual Fund"),
        }
    }
}

/// Qualitative risk of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// A catalog-defined investment profile used as input for simulations
/// and challenges. Read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Stable identifier (e.g., "stock1")
    pub id: String,

    /// Classification
    #[serde(rename = "type")]
    pub kind: ScenarioType,

    /// Display name, also used for sector matching
    pub name: String,

    pub description: String,

    /// Average annual return in percent (8.0 means 8 %)
    pub historical_return: f64,

    pub risk_level: RiskLevel,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        kind: ScenarioType,
        name: impl Into<String>,
        description: impl Into<String>,
        historical_return: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: description.into(),
            historical_return,
            risk_level,
        }
    }
}
