//! Viewer feedback log
//!
//! Stores name, rating, date and like flag for every viewer in a flat CSV
//! file, enforcing at most one rating per name per calendar day.

pub mod errors;
pub mod record;
pub mod stats;
pub mod store;

pub use errors::{FeedbackError, Result};
pub use record::{FeedbackRecord, HEADER, MAX_RATING, MIN_RATING};
pub use stats::{stats, viewer_names, FeedbackStats};
pub use store::{has_submitted_today, FeedbackStore, Submission, DEFAULT_FEEDBACK_PATH};
