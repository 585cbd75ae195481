//! model-registry - resolve model names to configured LLM clients
//!
//! Builds one OpenAI-compatible client per supported model from process
//! configuration and hands them out by name, falling back to a default model
//! for unknown names.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

pub use config::{Config, ProviderConfig};
pub use error::{AppError, AppResult};
pub use models::{ModelClient, ModelId, ModelRegistry};
