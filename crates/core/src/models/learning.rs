use serde::{Deserialize, Serialize};

/// Format of a learning hub entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningKind {
    Article,
    Video,
    Infographic,
    #[serde(rename = "Quick Fact")]
    QuickFact,
}

impl std::fmt::Display for LearningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearningKind::Article => write!(f, "Article"),
            LearningKind::Video => write!(f, "Video"),
            LearningKind::Infographic => write!(f, "Infographic"),
            LearningKind::QuickFact => write!(f, "Quick Fact"),
        }
    }
}

/// One static piece of educational content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LearningKind,
    pub title: String,
    pub description: String,
}
