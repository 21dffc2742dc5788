use thiserror::Error;

/// Errors raised while turning raw student records into a roster
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid student record: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Duplicate student identifier: {0}")]
    DuplicateId(String),

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),
}
