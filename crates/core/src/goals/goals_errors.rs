use thiserror::Error;

/// Custom error type for goal-related operations
#[derive(Debug, Error)]
pub enum GoalError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Goal already redeemed: {0}")]
    AlreadyRedeemed(String),
}

impl From<GoalError> for String {
    fn from(error: GoalError) -> Self {
        error.to_string()
    }
}

pub type Result<T> = std::result::Result<T, GoalError>;
