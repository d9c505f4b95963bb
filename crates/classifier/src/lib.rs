//! Tumor classifier core
//!
//! Turns 30 tumor measurements into a benign/malignant verdict with a
//! probability score.
//!
//! Modules:
//! - `features`: Fixed-order 30-value feature vector
//! - `scaler`: Pre-fitted standard scaler (`(x - mean) / scale`)
//! - `graph`: Frozen feed-forward graph artifact
//! - `engine`: Single-row inference over a loaded graph
//! - `classification`: Threshold policy and verdict types
//! - `predictor`: Scale-then-infer pipeline
//! - `artifacts`: Startup loading of model, scaler and image paths

pub mod artifacts;
pub mod classification;
pub mod engine;
pub mod errors;
pub mod features;
pub mod graph;
pub mod predictor;
pub mod scaler;

pub use artifacts::{ArtifactPaths, ArtifactSet};
pub use classification::{Diagnosis, Label, MALIGNANT_THRESHOLD};
pub use engine::InferenceEngine;
pub use errors::{ClassifierError, Result};
pub use features::{feature_index, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use graph::{Activation, Dense, Graph, Layer};
pub use predictor::Predictor;
pub use scaler::StandardScaler;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
