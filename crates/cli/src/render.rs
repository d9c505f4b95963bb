//! Plain-text rendering of results

use oncoscore_classifier::{Diagnosis, FeatureVector};
use oncoscore_feedback::{FeedbackStats, Submission};
use std::io::{self, Write};

pub const THANKS: &str = "Thank you for using the Breast Cancer Prediction App!";

pub fn diagnosis<W: Write>(out: &mut W, diagnosis: &Diagnosis) -> io::Result<()> {
    writeln!(out, "{}", diagnosis)?;
    writeln!(out, "---")?;
    writeln!(out, "{}", THANKS)
}

pub fn submission<W: Write>(out: &mut W, outcome: Submission) -> io::Result<()> {
    match outcome {
        Submission::Accepted => writeln!(out, "Thank you! Your rating has been recorded."),
        Submission::AlreadyRated => writeln!(out, "You have already rated today."),
    }
}

/// Viewer stats panel; an empty log shows `n/a` instead of a NaN average
pub fn viewer_stats<W: Write>(out: &mut W, stats: &FeedbackStats, names: &[&str]) -> io::Result<()> {
    writeln!(out, "Viewer Stats")?;
    writeln!(out, "Total Views: {}", stats.count)?;
    match stats.average_rating {
        Some(avg) => writeln!(out, "Average Rating: {:.1} ⭐", avg)?,
        None => writeln!(out, "Average Rating: n/a")?,
    }
    writeln!(out, "Viewers:")?;
    for name in names {
        writeln!(out, "- {}", name)?;
    }
    Ok(())
}

pub fn features<W: Write>(out: &mut W, features: &FeatureVector) -> io::Result<()> {
    for (i, (name, value)) in features.iter_named().enumerate() {
        writeln!(out, "{:>2}. {:<24} {}", i + 1, name, value)?;
    }
    Ok(())
}
