use serde::{Deserialize, Serialize};

/// Kind of holding in the user's portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    #[default]
    Stock,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Bond,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Crypto,
    /// Also absorbs unrecognised labels in stored data
    #[serde(other)]
    Other,
}

impl InvestmentType {
    /// All types, in the order the picker presents them.
    pub const ALL: [InvestmentType; 6] = [
        InvestmentType::Stock,
        InvestmentType::RealEstate,
        InvestmentType::Bond,
        InvestmentType::MutualFund,
        InvestmentType::Crypto,
        InvestmentType::Other,
    ];

    /// Parse a display label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentType::Stock => write!(f, "Stock"),
            InvestmentType::RealEstate => write!(f, "Real Estate"),
            InvestmentType::Bond => write!(f, "Bond"),
            InvestmentType::MutualFund => write!(f, "Mutual Fund"),
            InvestmentType::Crypto => write!(f, "Crypto"),
            InvestmentType::Other => write!(f, "Other"),
        }
    }
}

/// A single holding the user recorded in their portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Unique identifier within the portfolio collection
    pub id: String,

    #[serde(rename = "type")]
    pub kind: InvestmentType,

    pub name: String,

    /// Invested amount (always positive)
    pub amount: f64,

    /// Free-text date as entered (usually `YYYY-MM-DD`)
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Raw form input for creating or editing an [`Investment`].
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentDraft {
    pub kind: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub notes: String,
}

impl InvestmentDraft {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            amount: amount.into(),
            date: date.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Default for InvestmentDraft {
    fn default() -> Self {
        Self::new(InvestmentType::default().to_string(), "", "", "")
    }
}

/// Prefill an edit form from a stored record.
impl From<&Investment> for InvestmentDraft {
    fn from(inv: &Investment) -> Self {
        Self {
            kind: inv.kind.to_string(),
            name: inv.name.clone(),
            amount: inv.amount.to_string(),
            date: inv.date.clone(),
            notes: inv.notes.clone().unwrap_or_default(),
        }
    }
}

/// Validated, normalized investment fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentFields {
    pub kind: InvestmentType,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub notes: Option<String>,
}
