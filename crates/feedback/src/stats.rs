//! Aggregates shown next to the feedback form

use crate::record::FeedbackRecord;
use serde::Serialize;

/// View count and mean rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedbackStats {
    /// Total number of records
    pub count: usize,
    /// Mean rating, `None` when there are no records
    pub average_rating: Option<f64>,
}

pub fn stats(records: &[FeedbackRecord]) -> FeedbackStats {
    let count = records.len();
    let average_rating = if count == 0 {
        None
    } else {
        let total: u64 = records.iter().map(|r| u64::from(r.rating)).sum();
        Some(total as f64 / count as f64)
    };

    FeedbackStats {
        count,
        average_rating,
    }
}

/// Viewer names in file order, duplicates included
pub fn viewer_names(records: &[FeedbackRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
