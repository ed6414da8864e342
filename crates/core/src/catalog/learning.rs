use crate::models::learning::{LearningItem, LearningKind};

fn item(id: &str, kind: LearningKind, title: &str, description: &str) -> LearningItem {
    LearningItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Static learning hub content, in display order.
pub fn learning_items() -> Vec<LearningItem> {
    vec![
        item(
            "a1",
            LearningKind::Article,
            "Value Investing Explained",
            "Learn the principles of value investing and how to spot undervalued stocks.",
        ),
        item(
            "a2",
            LearningKind::Article,
            "Growth vs. Index Funds",
            "Compare growth investing with index fund strategies.",
        ),
        item(
            "v1",
            LearningKind::Video,
            "How Bonds Work",
            "A short video explaining the basics of bonds and fixed income.",
        ),
        item(
            "i1",
            LearningKind::Infographic,
            "Risk Diversification",
            "Visual guide to diversifying your investments.",
        ),
        item(
            "q1",
            LearningKind::QuickFact,
            "What is ROI?",
            "ROI stands for Return on Investment, a key metric for evaluating performance.",
        ),
        item(
            "q2",
            LearningKind::QuickFact,
            "Dividends",
            "Dividends are payments made by a corporation to its shareholders.",
        ),
    ]
}

/// Entries of one kind, in display order.
pub fn learning_items_of_kind(kind: LearningKind) -> Vec<LearningItem> {
    learning_items()
        .into_iter()
        .filter(|i| i.kind == kind)
        .collect()
}
