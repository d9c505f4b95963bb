//! Inference engine over a frozen graph
//!
//! Wraps a validated [`Graph`] and exposes a single-row predict call:
//! bind the `[1, n]` input, execute once, read the `[1, 1]` output.

use crate::errors::{ClassifierError, Result};
use crate::graph::Graph;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Frozen-graph executor
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    graph: Graph,
    model_hash: String,
}

impl InferenceEngine {
    /// Wrap an in-memory graph after validating it
    pub fn from_graph(graph: Graph) -> Result<Self> {
        graph.validate()?;
        let model_hash = graph.hash_hex()?;
        Ok(Self { graph, model_hash })
    }

    /// Load a graph artifact, checking its `.hash` sidecar when one exists
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let engine = Self::from_graph(Graph::load_json(path)?)?;

        let hash_path = hash_sidecar_path(path);
        if hash_path.exists() {
            let expected = fs::read_to_string(&hash_path)?.trim().to_lowercase();
            if expected != engine.model_hash {
                return Err(ClassifierError::HashMismatch {
                    expected,
                    computed: engine.model_hash,
                });
            }
            debug!("Model hash verified against {}", hash_path.display());
        }

        info!(
            "Model loaded ({} layers, input {:?}, hash {})",
            engine.graph.num_layers(),
            engine.graph.input.shape,
            engine.model_hash
        );
        Ok(engine)
    }

    /// Number of values the input slot accepts
    pub fn input_len(&self) -> usize {
        self.graph.input.len()
    }

    /// Hex blake3 hash of the loaded graph
    pub fn model_hash(&self) -> &str {
        &self.model_hash
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Probability of the positive class for one scaled feature row
    pub fn predict(&self, scaled: &[f32]) -> Result<f32> {
        if scaled.len() != self.input_len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.input_len(),
                actual: scaled.len(),
            });
        }

        let output = self.graph.execute(scaled);
        let probability = match output.as_slice() {
            [p] => *p,
            other => {
                return Err(ClassifierError::ModelInvocation(format!(
                    "output slot holds {} values, expected 1",
                    other.len()
                )))
            }
        };

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(ClassifierError::ModelInvocation(format!(
                "output {} is not a probability",
                probability
            )));
        }

        Ok(probability)
    }
}

/// `model.json` -> `model.hash`
pub fn hash_sidecar_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("hash")
}
