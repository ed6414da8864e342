use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::investment::InvestmentType;

/// Aggregate view of the portfolio collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of recorded investments
    pub investment_count: usize,

    /// Sum of all investment amounts
    pub total_value: f64,

    /// Total per investment type, largest first
    pub by_type: Vec<TypeAllocation>,
}

/// Share of the portfolio held in one investment type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAllocation {
    pub kind: InvestmentType,
    pub total: f64,
    /// `total / portfolio total * 100`
    pub allocation_pct: f64,
}

/// A point on the cumulative portfolio chart.
///
/// The core generates these; the frontend just renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// Date text as stored on the investment
    pub date: String,

    /// Parsed date, when the stored text is `YYYY-MM-DD`
    pub parsed_date: Option<NaiveDate>,

    /// Short axis label (`MM-DD` for full dates)
    pub label: String,

    /// Running total of amounts up to and including this point
    pub cumulative_value: f64,
}
