//! Frozen inference graph
//!
//! The classifier ships as a JSON artifact describing a small feed-forward
//! network:
//!
//! ```json
//! {
//!   "version": 1,
//!   "input":  {"name": "input",  "dtype": "float32", "shape": [1, 30]},
//!   "output": {"name": "output", "dtype": "float32", "shape": [1, 1]},
//!   "layers": [
//!     {"type": "dense", "kernel": [[...16 weights...], ...30 rows...], "bias": [...16...], "activation": "relu"},
//!     {"type": "dense", "kernel": [[w], ...16 rows...], "bias": [b], "activation": "sigmoid"}
//!   ]
//! }
//! ```
//!
//! # Guarantees
//!
//! - Shapes are validated once on load; execution performs no shape checks
//! - All arithmetic is `f32`, matching the float32 tensors of the exported model
//! - Hashing uses blake3 over canonical JSON (sorted keys, no whitespace)

pub mod canon;
pub mod layer;
pub mod model;

pub use canon::{hash_canonical_hex, to_canonical_json};
pub use layer::{Activation, Dense, Layer};
pub use model::{DType, Graph, TensorSpec, GRAPH_VERSION};
