//! Logger setup errors

/// Why a logger could not be installed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The filter directives did not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;
