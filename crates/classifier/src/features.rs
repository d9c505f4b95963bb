//! Tumor-measurement feature vector
//!
//! The classifier consumes exactly [`FEATURE_COUNT`] values in the order of
//! [`FEATURE_NAMES`]. The scaler and the graph were fit on this order; a
//! reordered vector does not fail, it silently predicts the wrong thing.

use crate::errors::{ClassifierError, Result};
use serde::{Deserialize, Serialize};

/// Number of input features expected by the scaler and the graph
pub const FEATURE_COUNT: usize = 30;

/// Value used for any feature the caller leaves unset
pub const DEFAULT_FEATURE_VALUE: f64 = 0.0;

/// Feature names in model order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "radius_mean",
    "texture_mean",
    "perimeter_mean",
    "area_mean",
    "smoothness_mean",
    "compactness_mean",
    "concavity_mean",
    "concave points_mean",
    "symmetry_mean",
    "fractal_dimension_mean",
    "radius_se",
    "texture_se",
    "perimeter_se",
    "area_se",
    "smoothness_se",
    "compactness_se",
    "concavity_se",
    "concave points_se",
    "symmetry_se",
    "fractal_dimension_se",
    "radius_worst",
    "texture_worst",
    "perimeter_worst",
    "area_worst",
    "smoothness_worst",
    "compactness_worst",
    "concavity_worst",
    "concave points_worst",
    "symmetry_worst",
    "fractal_dimension_worst",
];

/// Position of a feature in model order
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|candidate| *candidate == name)
}

/// Fixed-order vector of the 30 tumor measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build from values already in model order
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let values: [f64; FEATURE_COUNT] =
            values
                .try_into()
                .map_err(|_| ClassifierError::ShapeMismatch {
                    expected: FEATURE_COUNT,
                    actual: values.len(),
                })?;
        Ok(Self { values })
    }

    /// Build from `(name, value)` pairs; unset features keep the default
    ///
    /// Later pairs overwrite earlier ones for the same name.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut vector = Self::default();
        for (name, value) in pairs {
            vector.set(name, value)?;
        }
        Ok(vector)
    }

    /// Set one feature by name
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let index =
            feature_index(name).ok_or_else(|| ClassifierError::UnknownFeature(name.to_string()))?;
        self.values[index] = value;
        Ok(())
    }

    /// Read one feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|index| self.values[index])
    }

    /// Values in model order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate `(name, value)` in model order
    pub fn iter_named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [DEFAULT_FEATURE_VALUE; FEATURE_COUNT],
        }
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = ClassifierError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.values.to_vec()
    }
}
