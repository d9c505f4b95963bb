//! End-to-end session tests: artifacts on disk, scripted viewer input

use anyhow::Result;
use chrono::NaiveDate;
use oncoscore_classifier::{
    Activation, ArtifactPaths, ArtifactSet, Dense, Graph, Layer, StandardScaler, FEATURE_COUNT,
};
use oncoscore_cli::{commands, shell, Session};
use oncoscore_feedback::{FeedbackStore, Submission};
use std::fs;
use tempfile::TempDir;

/// Logistic regression on radius_mean only: P = sigmoid(radius_mean - 15)
fn write_artifacts(dir: &TempDir) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths::default().relative_to(dir.path());

    let mut kernel = vec![vec![0.0f32]; FEATURE_COUNT];
    kernel[0][0] = 1.0;
    let graph = Graph::new(
        FEATURE_COUNT,
        vec![Layer::Dense(Dense::new(kernel, vec![0.0], Activation::Sigmoid))],
    );
    graph.save_json(&paths.model)?;

    let mut mean = vec![0.0; FEATURE_COUNT];
    mean[0] = 15.0;
    let scaler = StandardScaler::new(mean, vec![1.0; FEATURE_COUNT])?;
    fs::write(&paths.scaler, serde_json::to_string(&scaler)?)?;
    fs::write(&paths.header_image, b"png")?;
    Ok(paths)
}

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn run_script(dir: &TempDir, script: &str) -> Result<String> {
    let artifacts = ArtifactSet::load(&write_artifacts(dir)?)?;
    let store = FeedbackStore::new(dir.path().join("viewers.csv"));
    let ctx = shell::ShellContext {
        predictor: &artifacts.predictor,
        store: &store,
        today: &fixed_day,
    };
    let mut session = Session::default();
    let mut out = Vec::new();
    shell::run(&ctx, &mut session, script.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_predict_with_default_inputs_is_benign() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = run_script(&dir, "predict\nquit\n")?;

    // sigmoid(0 - 15) is far below the threshold
    assert!(output.contains("Benign (Probability: 0.000)"));
    assert!(output.contains("Thank you for using the Breast Cancer Prediction App!"));
    Ok(())
}

#[test]
fn test_set_feature_flips_verdict() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = run_script(&dir, "set radius_mean 25\npredict\nset radius_mean 15\npredict\n")?;

    assert!(output.contains("Malignant (Probability: 1.000)"));
    // radius_mean == mean gives exactly 0.5, which stays benign
    assert!(output.contains("Benign (Probability: 0.500)"));
    Ok(())
}

#[test]
fn test_feature_names_with_spaces() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = run_script(&dir, "set concave points_mean 0.1471\nshow\n")?;

    assert!(output.contains("concave points_mean = 0.1471"));
    assert!(output.contains(" 8. concave points_mean"));
    Ok(())
}

#[test]
fn test_submit_twice_same_day() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = run_script(&dir, "name Alice\nrate 4\nsubmit\nrate 2\nsubmit\n")?;

    assert!(output.contains("Thank you! Your rating has been recorded."));
    assert!(output.contains("You have already rated today."));
    assert!(output.contains("Total Views: 1"));
    assert!(output.contains("Average Rating: 4.0"));

    let content = fs::read_to_string(dir.path().join("viewers.csv"))?;
    assert_eq!(content, "Name,Rating,Date,Liked\nAlice,4,2024-01-01,0\n");
    Ok(())
}

#[test]
fn test_bad_commands_do_not_end_session() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = run_script(&dir, "rate 9\nset tumor_size 1\nfly\npredict\n")?;

    assert!(output.contains("Error: rating must be 1-5"));
    assert!(output.contains("Error: Unknown feature: tumor_size"));
    assert!(output.contains("Unknown command 'fly'"));
    assert!(output.contains("Benign (Probability: 0.000)"));
    Ok(())
}

#[test]
fn test_session_starts_with_empty_stats() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = run_script(&dir, "")?;

    assert!(output.contains("Total Views: 0"));
    assert!(output.contains("Average Rating: n/a"));
    assert!(dir.path().join("viewers.csv").exists());
    Ok(())
}

#[test]
fn test_submit_command_uses_session_values() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FeedbackStore::new(dir.path().join("viewers.csv"));
    let session = Session::default();
    let mut out = Vec::new();

    let first = commands::submit_feedback(&store, &session, fixed_day(), &mut out)?;
    let next_day = fixed_day().succ_opt().expect("next day");
    let second = commands::submit_feedback(&store, &session, next_day, &mut out)?;

    assert_eq!(first, Submission::Accepted);
    assert_eq!(second, Submission::Accepted);
    let records = store.load()?;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.name == "Anonymous" && r.rating == 5));
    Ok(())
}
