//! Command handlers
//!
//! Every handler receives the state it works on (predictor, store, session,
//! date) as arguments and writes its user-facing output to `out`.

use crate::render;
use crate::session::Session;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use oncoscore_classifier::{Diagnosis, FeatureVector, Predictor};
use oncoscore_feedback::{stats, viewer_names, FeedbackStore, Submission};
use std::io::Write;
use tracing::info;

/// Run one prediction and print the verdict
pub fn predict<W: Write>(
    predictor: &Predictor,
    features: &FeatureVector,
    json: bool,
    out: &mut W,
) -> Result<Diagnosis> {
    let diagnosis = predictor
        .predict(features)
        .context("Prediction failed")?;

    if json {
        serde_json::to_writer(&mut *out, &diagnosis)?;
        writeln!(out)?;
    } else {
        render::diagnosis(out, &diagnosis)?;
    }
    Ok(diagnosis)
}

/// Record the session's rating for `today` and print the outcome
pub fn submit_feedback<W: Write>(
    store: &FeedbackStore,
    session: &Session,
    today: NaiveDate,
    out: &mut W,
) -> Result<Submission> {
    let mut records = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;

    let outcome = store
        .submit(&mut records, &session.user_name, session.user_rating, today)
        .context("Failed to record feedback")?;

    info!(name = %session.user_name, ?outcome, "feedback submitted");
    render::submission(out, outcome)?;
    Ok(outcome)
}

/// Print view count, average rating and viewer names
pub fn show_stats<W: Write>(store: &FeedbackStore, out: &mut W) -> Result<()> {
    let records = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;
    render::viewer_stats(out, &stats(&records), &viewer_names(&records))?;
    Ok(())
}
