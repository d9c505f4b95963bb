use thiserror::Error;

/// Errors returned by the feedback store.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("feedback file CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("feedback file is corrupt: {0}")]
    Corrupt(String),

    #[error("rating must be between {} and {}, got {rating}", crate::record::MIN_RATING, crate::record::MAX_RATING)]
    InvalidRating { rating: u8 },
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
