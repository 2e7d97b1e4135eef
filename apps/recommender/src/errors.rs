use thiserror::Error;

/// Errors surfaced by the recommendation facade and its stores.
///
/// Scoring itself never fails; only the two store boundaries can.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Assessment store error: {0}")]
    AssessmentStore(String),

    #[error("Career catalog error: {0}")]
    Catalog(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
