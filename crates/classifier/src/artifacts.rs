//! Startup artifact set
//!
//! Everything the classifier needs from disk is resolved here once, at
//! process start. A missing file is fatal; the caller gets an
//! [`ClassifierError::ArtifactMissing`] naming which one.

use crate::engine::InferenceEngine;
use crate::errors::{ClassifierError, Result};
use crate::predictor::Predictor;
use crate::scaler::StandardScaler;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Default model artifact file name
pub const DEFAULT_MODEL_PATH: &str = "breast_cancer_model.json";
/// Default scaler artifact file name
pub const DEFAULT_SCALER_PATH: &str = "scaler.json";
/// Default header image file name
pub const DEFAULT_HEADER_IMAGE_PATH: &str = "CGImg.png";

/// Locations of the startup artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    /// Presence-checked only; never decoded
    pub header_image: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            scaler: PathBuf::from(DEFAULT_SCALER_PATH),
            header_image: PathBuf::from(DEFAULT_HEADER_IMAGE_PATH),
        }
    }
}

impl ArtifactPaths {
    /// Resolve every relative path against `base`
    pub fn relative_to(&self, base: &Path) -> Self {
        Self {
            model: base.join(&self.model),
            scaler: base.join(&self.scaler),
            header_image: base.join(&self.header_image),
        }
    }

    /// Fail on the first artifact that does not exist
    pub fn ensure_present(&self) -> Result<()> {
        for (kind, path) in [
            ("model", &self.model),
            ("scaler", &self.scaler),
            ("image", &self.header_image),
        ] {
            if !path.is_file() {
                return Err(ClassifierError::ArtifactMissing {
                    kind,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Immutable handles loaded at startup
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub predictor: Predictor,
    pub header_image: PathBuf,
}

impl ArtifactSet {
    /// Check presence, then load scaler and model once
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        paths.ensure_present()?;

        let scaler = Arc::new(StandardScaler::load_json(&paths.scaler)?);
        let engine = Arc::new(InferenceEngine::load(&paths.model)?);
        let predictor = Predictor::new(scaler, engine)?;

        info!(
            "Artifacts ready (model {}, scaler {})",
            paths.model.display(),
            paths.scaler.display()
        );

        Ok(Self {
            predictor,
            header_image: paths.header_image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::default().relative_to(dir.path());

        match paths.ensure_present() {
            Err(ClassifierError::ArtifactMissing { kind, path }) => {
                assert_eq!(kind, "model");
                assert_eq!(path, dir.path().join(DEFAULT_MODEL_PATH));
            }
            other => panic!("expected ArtifactMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_image_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::default().relative_to(dir.path());
        std::fs::write(&paths.model, "{}").unwrap();
        std::fs::write(&paths.scaler, "{}").unwrap();

        assert!(matches!(
            ArtifactSet::load(&paths),
            Err(ClassifierError::ArtifactMissing { kind: "image", .. })
        ));
    }
}
