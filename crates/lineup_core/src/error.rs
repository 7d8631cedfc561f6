use thiserror::Error;

/// Structural layout errors.
///
/// Raised by the parser and the distributor, always intercepted by the
/// analyzer and turned into the fallback layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormationError {
    #[error("Invalid formation: '{descriptor}' has no valid line sizes")]
    EmptyDescriptor { descriptor: String },

    #[error("Goalkeeper count: expected exactly 1, found {found}")]
    GoalkeeperCount { found: usize },

    #[error("Insufficient players: formation needs {required} outfield players, found {available}")]
    InsufficientPlayers { required: usize, available: usize },
}

impl FormationError {
    /// Stable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            FormationError::EmptyDescriptor { .. } => "E_EMPTY_DESCRIPTOR",
            FormationError::GoalkeeperCount { .. } => "E_GOALKEEPER_COUNT",
            FormationError::InsufficientPlayers { .. } => "E_INSUFFICIENT_PLAYERS",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, FormationError>;
