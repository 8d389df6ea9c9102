//! Process-wide extraction configuration: one immutable value built at
//! startup and shared by reference into every strategy. Pattern tables
//! live in the rule set; everything else is plain data with environment
//! overrides.

use crate::extract::rules::RuleSet;

/// Default local Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default extraction model.
pub const DEFAULT_MODEL: &str = "llama3.2:1b";

/// Default collaborator call timeout, seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Object keys accepted in a model response, in probe order. The
/// alternates cover the keys small models substitute for the one the
/// prompt asks for.
pub const RESPONSE_KEYS: &[&str] = &["action_items", "items", "tasks", "actions"];

/// Immutable extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Line classification and marker-stripping table.
    pub rules: RuleSet,
    /// Accepted model-response keys, in probe order.
    pub response_keys: Vec<String>,
    /// Ollama base URL.
    pub base_url: String,
    /// Model identifier passed to the collaborator.
    pub model: String,
    /// Collaborator call timeout, seconds.
    pub timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            response_keys: RESPONSE_KEYS.iter().map(|k| k.to_string()).collect(),
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ExtractorConfig {
    /// Defaults with `OLLAMA_MODEL` and `OLLAMA_URL` environment
    /// overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        config
    }
}
