//! Error types for the classifier crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading artifacts or running a prediction
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A required artifact file is absent
    #[error("Missing {kind} artifact: {}", path.display())]
    ArtifactMissing {
        /// Which artifact (model, scaler, image)
        kind: &'static str,
        /// Path that was checked
        path: PathBuf,
    },

    /// Input length does not match the fitted parameter / tensor length
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Expected element count
        expected: usize,
        /// Element count actually supplied
        actual: usize,
    },

    /// Graph execution failed or produced an unusable output
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    /// Artifact parsed but its contents are inconsistent
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// Model hash sidecar does not match the loaded graph
    #[error("Model hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        /// Hash recorded next to the model
        expected: String,
        /// Hash of the graph that was loaded
        computed: String,
    },

    /// Unknown feature name supplied by the caller
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;
