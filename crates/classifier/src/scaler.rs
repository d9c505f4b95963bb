//! Pre-fitted standard scaler
//!
//! Applies `(x - mean) / scale` per feature. Parameters come from a JSON
//! artifact exported alongside the model and are never modified after load.

use crate::errors::{ClassifierError, Result};
use crate::features::FEATURE_COUNT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Per-feature affine normalization parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean
    #[serde(alias = "mean_")]
    pub mean: Vec<f64>,

    /// Per-feature scale (standard deviation)
    #[serde(alias = "scale_")]
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from raw parameter arrays
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Check parameter lengths and values
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ClassifierError::InvalidArtifact(format!(
                "scaler expects {} means and {} scales, found {} and {}",
                FEATURE_COUNT,
                FEATURE_COUNT,
                self.mean.len(),
                self.scale.len()
            )));
        }

        if let Some(i) = self.mean.iter().position(|m| !m.is_finite()) {
            return Err(ClassifierError::InvalidArtifact(format!(
                "scaler mean {} is not finite",
                i
            )));
        }

        if let Some(i) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(ClassifierError::InvalidArtifact(format!(
                "scaler scale {} must be finite and non-zero",
                i
            )));
        }

        Ok(())
    }

    /// Load scaler parameters from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scaler: StandardScaler = serde_json::from_str(&json)?;
        scaler.validate()?;
        debug!("Loaded scaler from {} ({} features)", path.display(), scaler.len());
        Ok(scaler)
    }

    /// Number of features the scaler was fit on
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Check if the scaler has no parameters
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Scale one feature vector
    pub fn transform(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.mean.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.mean.len(),
                actual: input.len(),
            });
        }

        Ok(input
            .iter()
            .zip(self.mean.iter())
            .zip(self.scale.iter())
            .map(|((&x, &mean), &scale)| (x - mean) / scale)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn unit_scaler() -> StandardScaler {
        StandardScaler::new(vec![0.0; FEATURE_COUNT], vec![1.0; FEATURE_COUNT]).unwrap()
    }

    #[test]
    fn test_transform_applies_mean_and_scale() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[0] = 14.0;
        scale[0] = 3.5;
        mean[29] = 0.08;
        scale[29] = 0.02;
        let scaler = StandardScaler::new(mean, scale).unwrap();

        let mut input = vec![2.0; FEATURE_COUNT];
        input[0] = 17.5;
        input[29] = 0.1;

        let output = scaler.transform(&input).unwrap();
        assert_eq!(output.len(), FEATURE_COUNT);
        assert_eq!(output[0], (17.5 - 14.0) / 3.5);
        assert_eq!(output[1], 2.0);
        assert_eq!(output[29], (0.1 - 0.08) / 0.02);
    }

    #[test]
    fn test_transform_rejects_wrong_length() {
        let err = unit_scaler().transform(&[1.0; 31]).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::ShapeMismatch {
                expected: 30,
                actual: 31
            }
        ));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[7] = 0.0;
        let err = StandardScaler::new(vec![0.0; FEATURE_COUNT], scale).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidArtifact(_)));
    }

    #[test]
    fn test_short_parameters_rejected() {
        let err = StandardScaler::new(vec![0.0; 10], vec![1.0; 10]).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidArtifact(_)));
    }

    #[test]
    fn test_load_json_accepts_sklearn_field_names() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        let json = serde_json::json!({
            "mean_": vec![1.5; FEATURE_COUNT],
            "scale_": vec![0.5; FEATURE_COUNT],
        });
        write!(file, "{}", json)?;
        file.flush()?;

        let scaler = StandardScaler::load_json(file.path())?;
        assert_eq!(scaler.len(), FEATURE_COUNT);
        assert_eq!(scaler.transform(&[2.0; FEATURE_COUNT])?[0], 1.0);
        Ok(())
    }
}
