//! Per-collection input validation.
//!
//! Every rule runs in two phases: parse and normalize the raw text, then
//! range-check the parsed values. A failure is a `CoreError::Validation`
//! whose message is shown to the user verbatim; nothing is mutated.

use crate::errors::CoreError;
use crate::models::challenge::{ChallengeDraft, ChallengeFields};
use crate::models::goal::{GoalDraft, GoalFields};
use crate::models::investment::{InvestmentDraft, InvestmentFields, InvestmentType};
use crate::models::simulation::{SimulationDraft, SimulationFields};

/// Trimmed text, or `None` when blank.
fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A finite decimal number. Rejects `NaN`, `inf` and trailing garbage.
fn number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn validate_investment(draft: &InvestmentDraft) -> Result<InvestmentFields, CoreError> {
    let (Some(name), Some(amount_text), Some(date)) =
        (text(&draft.name), text(&draft.amount), text(&draft.date))
    else {
        return Err(CoreError::invalid("Name, amount, and date are required."));
    };
    let kind = InvestmentType::from_label(&draft.kind).ok_or_else(|| {
        CoreError::invalid(format!("Unknown investment type '{}'.", draft.kind.trim()))
    })?;
    let amount = number(&amount_text);

    match amount {
        Some(amount) if amount > 0.0 => Ok(InvestmentFields {
            kind,
            name,
            amount,
            date,
            notes: text(&draft.notes),
        }),
        _ => Err(CoreError::invalid("Amount must be a positive number.")),
    }
}

pub fn validate_goal(draft: &GoalDraft) -> Result<GoalFields, CoreError> {
    let (Some(name), Some(target_text), Some(current_text), Some(target_date)) = (
        text(&draft.name),
        text(&draft.target_amount),
        text(&draft.current_amount),
        text(&draft.target_date),
    ) else {
        return Err(CoreError::invalid("All fields except notes are required."));
    };
    let target = number(&target_text);
    let current = number(&current_text);

    let target_amount = target
        .filter(|t| *t > 0.0)
        .ok_or_else(|| CoreError::invalid("Target amount must be a positive number."))?;
    let current_amount = current
        .filter(|c| *c >= 0.0)
        .ok_or_else(|| CoreError::invalid("Current amount must be zero or positive."))?;

    Ok(GoalFields {
        name,
        target_amount,
        // -0.0 parses fine; store it as plain zero
        current_amount: current_amount + 0.0,
        target_date,
        notes: text(&draft.notes),
    })
}

pub fn validate_challenge(draft: &ChallengeDraft) -> Result<ChallengeFields, CoreError> {
    let (Some(name), Some(sector), Some(amount_text), Some(start_date)) = (
        text(&draft.name),
        text(&draft.sector),
        text(&draft.amount),
        text(&draft.start_date),
    ) else {
        return Err(CoreError::invalid("All fields are required."));
    };

    let amount = number(&amount_text)
        .filter(|a| *a > 0.0)
        .ok_or_else(|| CoreError::invalid("Amount must be a positive number."))?;

    Ok(ChallengeFields {
        name,
        sector,
        amount,
        start_date,
    })
}

pub fn validate_simulation(draft: &SimulationDraft) -> Result<SimulationFields, CoreError> {
    let scenario_id = text(&draft.scenario_id)
        .ok_or_else(|| CoreError::invalid("Select a scenario first."))?;
    let (Some(amount_text), Some(years_text)) = (text(&draft.amount), text(&draft.years)) else {
        return Err(CoreError::invalid("Please enter both amount and years."));
    };
    let amount = number(&amount_text);
    let years = years_text.parse::<u32>().ok();

    let amount = amount
        .filter(|a| *a > 0.0)
        .ok_or_else(|| CoreError::invalid("Amount must be a positive number."))?;
    let years = years
        .filter(|y| *y > 0)
        .ok_or_else(|| CoreError::invalid("Years must be a positive integer."))?;

    Ok(SimulationFields {
        scenario_id,
        amount,
        years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_rejects_non_finite_and_garbage() {
        assert_eq!(number(" 12.5 "), Some(12.5));
        assert_eq!(number("NaN"), None);
        assert_eq!(number("inf"), None);
        assert_eq!(number("12abc"), None);
        assert_eq!(number(""), None);
    }

    #[test]
    fn text_trims_and_drops_blank() {
        assert_eq!(text("  hi "), Some("hi".to_string()));
        assert_eq!(text("   "), None);
    }
}
