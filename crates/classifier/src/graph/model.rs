//! Frozen graph definition
//!
//! A graph has one input tensor, one output tensor, and a chain of layers
//! between them. Every shape relation is checked by [`Graph::validate`] when
//! the artifact is loaded, so execution never needs to re-check it.

use super::canon::{hash_canonical_hex, to_canonical_json};
use super::layer::Layer;
use crate::errors::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current graph artifact version
pub const GRAPH_VERSION: u32 = 1;

/// Tensor element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float32,
}

/// Name, element type and shape of an input or output slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorSpec {
    pub name: String,
    pub dtype: DType,
    pub shape: Vec<usize>,
}

impl TensorSpec {
    pub fn float32(name: impl Into<String>, shape: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            dtype: DType::Float32,
            shape,
        }
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Batch size 1 and a single feature dimension: `[1, n]`
    fn single_row_width(&self) -> Option<usize> {
        match self.shape.as_slice() {
            [1, n] => Some(*n),
            _ => None,
        }
    }
}

/// Frozen inference graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Artifact format version
    pub version: u32,
    pub input: TensorSpec,
    pub output: TensorSpec,
    pub layers: Vec<Layer>,
}

impl Graph {
    /// Create a graph with `[1, inputs]` input and `[1, 1]` output slots
    pub fn new(inputs: usize, layers: Vec<Layer>) -> Self {
        Self {
            version: GRAPH_VERSION,
            input: TensorSpec::float32("input", vec![1, inputs]),
            output: TensorSpec::float32("output", vec![1, 1]),
            layers,
        }
    }

    /// Validate tensor specs and layer chaining
    pub fn validate(&self) -> Result<()> {
        if self.version != GRAPH_VERSION {
            return Err(ClassifierError::ModelInvocation(format!(
                "Unsupported graph version: {}",
                self.version
            )));
        }

        let mut width = self.input.single_row_width().ok_or_else(|| {
            ClassifierError::ModelInvocation(format!(
                "input tensor '{}' must have shape [1, n], found {:?}",
                self.input.name, self.input.shape
            ))
        })?;

        if self.output.shape != [1, 1] {
            return Err(ClassifierError::ModelInvocation(format!(
                "output tensor '{}' must have shape [1, 1], found {:?}",
                self.output.name, self.output.shape
            )));
        }

        if self.layers.is_empty() {
            return Err(ClassifierError::ModelInvocation(
                "graph has no layers".to_string(),
            ));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            layer.validate().map_err(|e| {
                ClassifierError::ModelInvocation(format!("layer {} invalid: {}", i, e))
            })?;
            if layer.inputs() != width {
                return Err(ClassifierError::ModelInvocation(format!(
                    "layer {} expects {} inputs but receives {}",
                    i,
                    layer.inputs(),
                    width
                )));
            }
            width = layer.units();
        }

        if width != self.output.len() {
            return Err(ClassifierError::ModelInvocation(format!(
                "final layer produces {} values, output tensor holds {}",
                width,
                self.output.len()
            )));
        }

        Ok(())
    }

    /// Run every layer once over a flattened `[1, n]` input
    ///
    /// Assumes a validated graph and `input.len() == self.input.len()`.
    pub fn execute(&self, input: &[f32]) -> Vec<f32> {
        self.layers
            .iter()
            .fold(input.to_vec(), |activations, layer| layer.forward(&activations))
    }

    /// Serialize graph to canonical JSON (sorted keys, no whitespace)
    pub fn to_canonical_json(&self) -> Result<String> {
        Ok(to_canonical_json(self)?)
    }

    /// Blake3 hash of the canonical JSON form, hex encoded
    pub fn hash_hex(&self) -> Result<String> {
        Ok(hash_canonical_hex(self)?)
    }

    /// Save graph as canonical JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_canonical_json()?)?;
        Ok(())
    }

    /// Load and validate a graph from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let graph: Graph = serde_json::from_str(&json)?;
        graph.validate()?;
        Ok(graph)
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}
