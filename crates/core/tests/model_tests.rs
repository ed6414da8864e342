// ═══════════════════════════════════════════════════════════════════
// Model Tests — record serialization, drafts, goal progress,
// scenario catalog, learning content
// ═══════════════════════════════════════════════════════════════════

use invest_lab_core::catalog::learning::{learning_items, learning_items_of_kind};
use invest_lab_core::catalog::scenarios::ScenarioCatalog;
use invest_lab_core::models::challenge::{Challenge, ChallengeDraft, SECTORS};
use invest_lab_core::models::goal::{progress_percent, Goal, GoalDraft};
use invest_lab_core::models::investment::{Investment, InvestmentDraft, InvestmentType};
use invest_lab_core::models::learning::LearningKind;
use invest_lab_core::models::scenario::{RiskLevel, ScenarioType};
use invest_lab_core::models::simulation::{Simulation, SimulationDraft};

fn goal(current: f64, target: f64) -> Goal {
    Goal {
        id: "g1".into(),
        name: "Emergency fund".into(),
        target_amount: target,
        current_amount: current,
        target_date: "2026-12-31".into(),
        notes: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
// InvestmentType
// ═══════════════════════════════════════════════════════════════════

mod investment_type {
    use super::*;

    #[test]
    fn display_labels() {
        let labels: Vec<String> = InvestmentType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Stock", "Real Estate", "Bond", "Mutual Fund", "Crypto", "Other"]
        );
    }

    #[test]
    fn from_label_ignores_case_and_whitespace() {
        assert_eq!(InvestmentType::from_label("mutual fund"), Some(InvestmentType::MutualFund));
        assert_eq!(InvestmentType::from_label("  CRYPTO "), Some(InvestmentType::Crypto));
        assert_eq!(InvestmentType::from_label("Gold"), None);
        assert_eq!(InvestmentType::from_label(""), None);
    }

    #[test]
    fn default_is_stock() {
        assert_eq!(InvestmentType::default(), InvestmentType::Stock);
        assert_eq!(InvestmentDraft::default().kind, "Stock");
    }

    #[test]
    fn unknown_stored_label_reads_as_other() {
        let kind: InvestmentType = serde_json::from_str("\"ETF\"").unwrap();
        assert_eq!(kind, InvestmentType::Other);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"Other\"");
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&InvestmentType::RealEstate).unwrap();
        assert_eq!(json, "\"Real Estate\"");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Record serialization
// ═══════════════════════════════════════════════════════════════════

mod serialization {
    use super::*;

    #[test]
    fn investment_uses_type_field_and_omits_empty_notes() {
        let inv = Investment {
            id: "1".into(),
            kind: InvestmentType::Bond,
            name: "T-Bill".into(),
            amount: 500.0,
            date: "2024-01-01".into(),
            notes: None,
        };
        let value = serde_json::to_value(&inv).unwrap();
        assert_eq!(value["type"], "Bond");
        assert!(value.get("notes").is_none());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn legacy_timestamp_ids_load() {
        let json = r#"[{"id":"1700000000000","type":"Real Estate","name":"Flat","amount":250000,"date":"2023-05-01"}]"#;
        let list: Vec<Investment> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].id, "1700000000000");
        assert_eq!(list[0].kind, InvestmentType::RealEstate);
        assert_eq!(list[0].amount, 250000.0);
        assert_eq!(list[0].notes, None);
    }

    #[test]
    fn goal_fields_are_camel_case() {
        let value = serde_json::to_value(goal(10.0, 100.0)).unwrap();
        assert_eq!(value["targetAmount"], 100.0);
        assert_eq!(value["currentAmount"], 10.0);
        assert_eq!(value["targetDate"], "2026-12-31");
    }

    #[test]
    fn challenge_fields_are_camel_case() {
        let c = Challenge {
            id: "c1".into(),
            name: "Tech bet".into(),
            sector: "Tech".into(),
            amount: 100.0,
            start_date: "2024-01-01".into(),
            simulated_return: 112.0,
            scenario_name: "Tech Growth Stocks".into(),
        };
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["startDate"], "2024-01-01");
        assert_eq!(value["simulatedReturn"], 112.0);
        assert_eq!(value["scenarioName"], "Tech Growth Stocks");
    }

    #[test]
    fn simulation_round_trips_exactly() {
        let sim = Simulation {
            id: "s1".into(),
            scenario_id: "stock1".into(),
            scenario_name: "Blue Chip Stocks".into(),
            amount: 1000.0,
            years: 5,
            projected_return: 1469.3280768,
            date: "2024-01-01 10:00:00".into(),
        };
        let json = serde_json::to_string(&sim).unwrap();
        assert!(json.contains("\"projectedReturn\""));
        let back: Simulation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sim);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Drafts
// ═══════════════════════════════════════════════════════════════════

mod drafts {
    use super::*;

    #[test]
    fn investment_draft_prefills_from_record() {
        let inv = Investment {
            id: "1".into(),
            kind: InvestmentType::MutualFund,
            name: "World ETF".into(),
            amount: 1250.5,
            date: "2024-03-01".into(),
            notes: Some("monthly".into()),
        };
        let draft = InvestmentDraft::from(&inv);
        assert_eq!(draft.kind, "Mutual Fund");
        assert_eq!(draft.amount, "1250.5");
        assert_eq!(draft.notes, "monthly");
    }

    #[test]
    fn goal_draft_prefills_from_record() {
        let draft = GoalDraft::from(&goal(0.0, 300.0));
        assert_eq!(draft.current_amount, "0");
        assert_eq!(draft.target_amount, "300");
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn challenge_draft_defaults_to_first_sector() {
        assert_eq!(ChallengeDraft::default().sector, SECTORS[0]);
        assert_eq!(SECTORS, ["Tech", "Real Estate", "Bonds", "Index Fund", "Other"]);
    }

    #[test]
    fn simulation_draft_prefills_years() {
        let sim = Simulation {
            id: "s".into(),
            scenario_id: "bond1".into(),
            scenario_name: "Government Bonds".into(),
            amount: 200.0,
            years: 7,
            projected_return: 0.0,
            date: String::new(),
        };
        let draft = SimulationDraft::from(&sim);
        assert_eq!(draft, SimulationDraft::new("bond1", "200", "7"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Goal progress
// ═══════════════════════════════════════════════════════════════════

mod goal_progress {
    use super::*;

    #[test]
    fn over_target_clamps_to_100() {
        assert_eq!(goal(150.0, 100.0).progress_percent(), 100);
    }

    #[test]
    fn rounds_to_nearest_percent() {
        assert_eq!(progress_percent(1.0, 3.0), 33);
        assert_eq!(progress_percent(2.0, 3.0), 67);
        assert_eq!(progress_percent(50.0, 200.0), 25);
    }

    #[test]
    fn zero_current_is_zero() {
        assert_eq!(goal(0.0, 100.0).progress_percent(), 0);
    }

    #[test]
    fn degenerate_values_are_zero() {
        assert_eq!(progress_percent(10.0, 0.0), 0);
        assert_eq!(progress_percent(-10.0, 100.0), 0);
        assert_eq!(progress_percent(f64::NAN, 100.0), 0);
    }

    #[test]
    fn reached_flag() {
        assert!(goal(100.0, 100.0).is_reached());
        assert!(!goal(99.0, 100.0).is_reached());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Scenario catalog
// ═══════════════════════════════════════════════════════════════════

mod scenario_catalog {
    use super::*;

    #[test]
    fn builtin_has_five_scenarios_in_order() {
        let catalog = ScenarioCatalog::builtin();
        let ids: Vec<&str> = catalog.all().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["stock1", "stock2", "realestate1", "bond1", "mutual1"]);
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = ScenarioCatalog::default();
        let s = catalog.by_id("stock2").unwrap();
        assert_eq!(s.name, "Tech Growth Stocks");
        assert_eq!(s.historical_return, 12.0);
        assert_eq!(s.risk_level, RiskLevel::High);
        assert!(catalog.by_id("STOCK2").is_none());
    }

    #[test]
    fn filter_by_type_and_risk() {
        let catalog = ScenarioCatalog::builtin();
        assert_eq!(catalog.by_type(ScenarioType::Stock).len(), 2);
        assert_eq!(catalog.by_risk(RiskLevel::Low)[0].id, "bond1");
        assert_eq!(catalog.by_risk(RiskLevel::Medium).len(), 3);
    }

    #[test]
    fn blank_sector_never_matches() {
        assert!(ScenarioCatalog::builtin().match_sector("  ").is_none());
    }

    #[test]
    fn scenario_serializes_with_snake_case_type() {
        let catalog = ScenarioCatalog::builtin();
        let value = serde_json::to_value(catalog.by_id("realestate1").unwrap()).unwrap();
        assert_eq!(value["type"], "real_estate");
        assert_eq!(value["riskLevel"], "medium");
        assert_eq!(value["historicalReturn"], 6.0);
    }

    #[test]
    fn risk_level_display_is_upper_case() {
        assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Learning hub
// ═══════════════════════════════════════════════════════════════════

mod learning {
    use super::*;

    #[test]
    fn has_six_items_with_unique_ids() {
        let items = learning_items();
        assert_eq!(items.len(), 6);
        let ids: std::collections::HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn filter_by_kind() {
        let facts = learning_items_of_kind(LearningKind::QuickFact);
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].title, "What is ROI?");
        assert_eq!(LearningKind::QuickFact.to_string(), "Quick Fact");
    }
}
