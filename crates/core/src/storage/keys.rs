//! Slot names in the key-value store. One slot per collection.

pub const PORTFOLIO: &str = "portfolio";
pub const GOALS: &str = "goals";
pub const CHALLENGES: &str = "challenges";
pub const SIMULATIONS: &str = "simulations";
pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
