/// Error types for fetching and parsing team statistics
use thiserror::Error;

/// Main error type for shot statistics operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShotsError {
    /// Transport failure, connection failure or a non-success HTTP status
    #[error("Network error for {url}: {reason}")]
    Network { url: String, reason: String },

    /// The endpoint answered with an empty team list
    #[error("No teams available from the statistics endpoint")]
    EmptyResult,

    /// The selected team is absent from the statistics payload
    #[error("Team not found: {0}")]
    NotFound(String),

    /// A required field is missing or holds an invalid number
    #[error("Malformed statistics data: {0}")]
    MalformedData(String),
}

/// Type alias for Results using ShotsError
pub type Result<T> = std::result::Result<T, ShotsError>;
