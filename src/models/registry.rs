//! Model registry
//!
//! Maps model names to client handles. Built once from a [`ProviderConfig`]
//! and read-only afterwards, so it can be shared across tasks without locking.

use crate::config::ProviderConfig;
use crate::error::AppResult;
use crate::models::{ModelClient, ModelId};
use std::sync::Arc;

/// Immutable registry of one client per supported model
#[derive(Debug)]
pub struct ModelRegistry {
    /// Indexed by [`ModelId::index`], in [`ModelId::ALL`] order
    clients: Vec<Arc<ModelClient>>,
}

impl ModelRegistry {
    /// Construct a client for every supported model
    ///
    /// No network I/O happens here. Client construction errors (for example
    /// a malformed base URL) are returned to the caller unchanged.
    pub fn new(provider: &ProviderConfig) -> AppResult<Self> {
        let clients = ModelId::ALL
            .into_iter()
            .map(|id| ModelClient::new(id, provider).map(Arc::new))
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!(
            model_count = clients.len(),
            base_url = %provider.base_url(),
            default_model = %ModelId::DEFAULT,
            "Model registry initialized"
        );

        Ok(Self { clients })
    }

    /// Get the client for a model name, falling back to the default model
    ///
    /// Never fails: unknown names (including the empty string) resolve to
    /// [`ModelId::DEFAULT`]. Repeated calls return the same handle.
    pub fn get(&self, name: &str) -> &Arc<ModelClient> {
        self.get_by_id(self.resolve(name))
    }

    /// Get the client for a typed model identifier
    pub fn get_by_id(&self, id: ModelId) -> &Arc<ModelClient> {
        &self.clients[id.index()]
    }

    /// Resolve a model name to a registered identifier, logging the outcome
    pub fn resolve(&self, name: &str) -> ModelId {
        match name.parse::<ModelId>() {
            Ok(id) => {
                tracing::info!(model = %id, "Using model: {}", id);
                id
            }
            Err(_) => {
                tracing::info!(requested = %name, "Model {} not found", name);
                tracing::info!(
                    default_model = %ModelId::DEFAULT,
                    "Defaulting to {}",
                    ModelId::DEFAULT
                );
                ModelId::DEFAULT
            }
        }
    }

    /// Names of all registered models, in registration order
    pub fn available_models(&self) -> Vec<&'static str> {
        self.clients
            .iter()
            .map(|client| client.model().as_str())
            .collect()
    }
}
