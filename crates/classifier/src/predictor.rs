//! Scale-then-infer prediction pipeline

use crate::classification::Diagnosis;
use crate::engine::InferenceEngine;
use crate::errors::{ClassifierError, Result};
use crate::features::FeatureVector;
use crate::scaler::StandardScaler;
use std::sync::Arc;
use tracing::debug;

/// Scaler and engine handles shared read-only by every prediction
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: Arc<StandardScaler>,
    engine: Arc<InferenceEngine>,
}

impl Predictor {
    /// Pair a scaler with an engine; their widths must agree
    pub fn new(scaler: Arc<StandardScaler>, engine: Arc<InferenceEngine>) -> Result<Self> {
        if scaler.len() != engine.input_len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: engine.input_len(),
                actual: scaler.len(),
            });
        }
        Ok(Self { scaler, engine })
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Scale the features and return P(malignant)
    pub fn probability(&self, features: &FeatureVector) -> Result<f32> {
        let scaled: Vec<f32> = self
            .scaler
            .transform(features.as_slice())?
            .into_iter()
            .map(|v| v as f32)
            .collect();
        self.engine.predict(&scaled)
    }

    /// Scale, infer and classify one sample
    pub fn predict(&self, features: &FeatureVector) -> Result<Diagnosis> {
        let probability = self.probability(features)?;
        let diagnosis = Diagnosis::from_probability(probability);
        debug!(
            label = %diagnosis.label,
            probability = diagnosis.probability,
            "prediction complete"
        );
        Ok(diagnosis)
    }
}
