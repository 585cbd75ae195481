//! Type-safe model identifiers
//!
//! The set of supported models is closed and known at compile time. Adding a
//! variant and listing it in [`ModelId::ALL`] registers it everywhere.

use std::fmt;
use std::str::FromStr;

/// A supported model
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ModelId {
    /// Gemini 2.5 Flash served through an OpenAI-compatible gateway
    Gemini25Flash,
}

impl ModelId {
    /// Every supported model, in registration order
    pub const ALL: [ModelId; 1] = [ModelId::Gemini25Flash];

    /// Model used whenever a requested name is not registered
    pub const DEFAULT: ModelId = ModelId::Gemini25Flash;

    /// The wire name sent to the provider
    pub const fn as_str(self) -> &'static str {
        match self {
            ModelId::Gemini25Flash => "models/gemini-2.5-flash",
        }
    }

    /// Position of this model in [`ModelId::ALL`]
    pub(crate) const fn index(self) -> usize {
        match self {
            ModelId::Gemini25Flash => 0,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any supported model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{0}'")]
pub struct UnknownModel(pub String);

impl FromStr for ModelId {
    type Err = UnknownModel;

    /// Exact, case-sensitive match against [`ModelId::as_str`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
