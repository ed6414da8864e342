use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::investment::{Investment, InvestmentType};
use crate::models::summary::{CumulativePoint, PortfolioSummary, TypeAllocation};

/// Aggregates over the portfolio collection: totals, allocation, chart series.
///
/// Pure business logic, no I/O. Easy to test.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of all investment amounts.
    #[must_use]
    pub fn total_value(&self, investments: &[Investment]) -> f64 {
        investments.iter().map(|i| i.amount).sum()
    }

    /// Totals per investment type, largest first.
    #[must_use]
    pub fn summarize(&self, investments: &[Investment]) -> PortfolioSummary {
        let total_value = self.total_value(investments);

        let mut totals: HashMap<InvestmentType, f64> = HashMap::new();
        for inv in investments {
            *totals.entry(inv.kind).or_insert(0.0) += inv.amount;
        }

        let mut by_type: Vec<TypeAllocation> = totals
            .into_iter()
            .map(|(kind, total)| TypeAllocation {
                kind,
                total,
                allocation_pct: if total_value > 0.0 {
                    total / total_value * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        // Ties fall back to picker order so output is deterministic
        by_type.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| type_rank(a.kind).cmp(&type_rank(b.kind)))
        });

        PortfolioSummary {
            investment_count: investments.len(),
            total_value,
            by_type,
        }
    }

    /// Running total of amounts, oldest investment first.
    ///
    /// Investments whose date is not `YYYY-MM-DD` keep their relative
    /// order and come after every dated one.
    #[must_use]
    pub fn cumulative_series(&self, investments: &[Investment]) -> Vec<CumulativePoint> {
        let mut dated: Vec<(Option<NaiveDate>, &Investment)> = investments
            .iter()
            .map(|inv| (parse_date(&inv.date), inv))
            .collect();
        dated.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let mut cumulative = 0.0;
        dated
            .into_iter()
            .map(|(parsed_date, inv)| {
                cumulative += inv.amount;
                CumulativePoint {
                    date: inv.date.clone(),
                    parsed_date,
                    label: axis_label(&inv.date),
                    cumulative_value: cumulative,
                }
            })
            .collect()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// `MM-DD` for long dates, the text itself otherwise.
fn axis_label(date: &str) -> String {
    if date.chars().count() > 5 {
        date.chars().skip(5).collect()
    } else {
        date.to_string()
    }
}

fn type_rank(kind: InvestmentType) -> usize {
    InvestmentType::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_label_drops_year() {
        assert_eq!(axis_label("2024-03-15"), "03-15");
        assert_eq!(axis_label("May"), "May");
    }
}
