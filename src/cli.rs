//! Command-line interface for model-registry
//!
//! Provides argument parsing and subcommand handling for the binary.

use clap::{Parser, Subcommand};

/// Resolve model names to configured LLM clients
#[derive(Parser)]
#[command(name = "model-registry")]
#[command(version)]
#[command(about = "Resolve model names to configured OpenAI-compatible LLM clients")]
#[command(
    long_about = "Builds one client per supported model from OPENAI_API_KEY and \
    OPENAI_API_BASE (or a config file), lists the registered models, and resolves \
    requested names with fallback to the default model."
)]
pub struct Cli {
    /// Path to an optional configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the registered model names
    Models,
    /// Show which registered model a name resolves to
    Resolve {
        /// Requested model name
        name: String,
    },
    /// Send a single prompt to a model and print the reply
    Ask {
        /// Requested model name (unknown names use the default model)
        #[arg(short, long, default_value = crate::models::ModelId::DEFAULT.as_str())]
        model: String,
        /// Prompt text
        prompt: String,
    },
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# model-registry configuration
#
# Every setting is optional. Non-empty environment variables take precedence:
#   OPENAI_API_KEY   overrides provider.api_key
#   OPENAI_API_BASE  overrides provider.base_url
# An empty environment variable is ignored when the file sets the value.

[provider]
# OpenAI-compatible API base URL (defaults to https://apigem.psy-tech.link/hf/v1)
# base_url = "https://your-gateway.example/v1"

# API key sent as a bearer token (not validated locally)
# api_key = "sk-..."

# Per-request timeout in seconds, between 1 and 300
request_timeout_seconds = 60

[observability]
# Log level: "trace", "debug", "info", "warn", "error"
log_level = "info"
"#
}
