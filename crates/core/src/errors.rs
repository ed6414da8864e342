use thiserror::Error;

/// Unified error type for the entire invest-lab-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    /// User input failed validation. The message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Catalog ─────────────────────────────────────────────────────
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Scenario catalog is empty")]
    EmptyCatalog,

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Shorthand used by the validation rules.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            CoreError::FileIO(e.to_string())
        } else {
            CoreError::Deserialization(e.to_string())
        }
    }
}
