//! Graph layers
//!
//! Only fully connected layers are supported. The kernel is stored
//! input-major (`kernel[i][j]` connects input `i` to unit `j`), which is the
//! layout Keras exports.

use serde::{Deserialize, Serialize};

/// Element-wise activation applied after a layer's affine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

/// Fully connected layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dense {
    /// Weights, `inputs x units`
    pub kernel: Vec<Vec<f32>>,
    /// One bias per unit
    pub bias: Vec<f32>,
    pub activation: Activation,
}

impl Dense {
    pub fn new(kernel: Vec<Vec<f32>>, bias: Vec<f32>, activation: Activation) -> Self {
        Self {
            kernel,
            bias,
            activation,
        }
    }

    /// Width of the input this layer accepts
    pub fn inputs(&self) -> usize {
        self.kernel.len()
    }

    /// Width of the output this layer produces
    pub fn units(&self) -> usize {
        self.bias.len()
    }

    /// Check kernel rows agree with the bias width and every weight is finite
    pub fn validate(&self) -> Result<(), String> {
        if self.bias.is_empty() {
            return Err("dense layer has no units".to_string());
        }
        for (i, row) in self.kernel.iter().enumerate() {
            if row.len() != self.units() {
                return Err(format!(
                    "kernel row {} has {} weights, expected {}",
                    i,
                    row.len(),
                    self.units()
                ));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(format!("kernel row {} contains a non-finite weight", i));
            }
        }
        if self.bias.iter().any(|b| !b.is_finite()) {
            return Err("bias contains a non-finite value".to_string());
        }
        Ok(())
    }

    /// Affine step plus activation; `input.len()` must equal [`Dense::inputs`]
    pub fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut out = self.bias.clone();
        for (x, row) in input.iter().zip(self.kernel.iter()) {
            for (acc, w) in out.iter_mut().zip(row.iter()) {
                *acc += x * w;
            }
        }
        for v in out.iter_mut() {
            *v = self.activation.apply(*v);
        }
        out
    }
}

/// A single graph layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Dense(Dense),
}

impl Layer {
    pub fn inputs(&self) -> usize {
        match self {
            Layer::Dense(dense) => dense.inputs(),
        }
    }

    pub fn units(&self) -> usize {
        match self {
            Layer::Dense(dense) => dense.units(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            Layer::Dense(dense) => dense.validate(),
        }
    }

    pub fn forward(&self, input: &[f32]) -> Vec<f32> {
        match self {
            Layer::Dense(dense) => dense.forward(input),
        }
    }
}
