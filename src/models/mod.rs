//! Model identifiers, clients, and the registry that binds them
//!
//! One [`ModelClient`] is built per [`ModelId`] and held by the
//! [`ModelRegistry`] for the lifetime of the process.

pub mod client;
pub mod id;
pub mod registry;
pub mod types;

pub use client::ModelClient;
pub use id::{ModelId, UnknownModel};
pub use registry::ModelRegistry;
