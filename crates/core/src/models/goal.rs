use serde::{Deserialize, Serialize};

/// A savings goal with a target and the amount saved so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Goal {
    /// Progress toward the target as a whole percentage in `0..=100`.
    ///
    /// Recomputed on every call, never persisted.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_amount, self.target_amount)
    }

    /// Whether the saved amount has reached the target.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.target_amount > 0.0 && self.current_amount >= self.target_amount
    }
}

/// `round(current / target * 100)` clamped to `[0, 100]`.
/// A non-positive or non-finite target yields 0.
#[must_use]
pub fn progress_percent(current: f64, target: f64) -> u8 {
    if !target.is_finite() || !current.is_finite() || target <= 0.0 {
        return 0;
    }
    let pct = (current / target * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Raw form input for a [`Goal`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: String,
    pub notes: String,
}

impl GoalDraft {
    pub fn new(
        name: impl Into<String>,
        target_amount: impl Into<String>,
        current_amount: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount: target_amount.into(),
            current_amount: current_amount.into(),
            target_date: target_date.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl From<&Goal> for GoalDraft {
    fn from(goal: &Goal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount.to_string(),
            current_amount: goal.current_amount.to_string(),
            target_date: goal.target_date.clone(),
            notes: goal.notes.clone().unwrap_or_default(),
        }
    }
}

/// Validated goal fields.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalFields {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: String,
    pub notes: Option<String>,
}
