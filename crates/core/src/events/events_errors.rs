use thiserror::Error;

/// Custom error type for point event operations
#[derive(Debug, Error)]
pub enum PointEventError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<PointEventError> for String {
    fn from(error: PointEventError) -> Self {
        error.to_string()
    }
}

pub type Result<T> = std::result::Result<T, PointEventError>;
