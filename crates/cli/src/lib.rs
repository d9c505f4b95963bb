//! Oncoscore command line front end
//!
//! Collects feature inputs and viewer details, drives the classifier and the
//! feedback store, and renders their results as text.

pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;
pub mod shell;

pub use config::AppConfig;
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
