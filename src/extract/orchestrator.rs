//! Composes the two extraction strategies behind one entry point:
//! prompt → collaborator → parse → normalize for the model-assisted
//! path, with the heuristic extractor as the leaf and as the fallback.

use std::sync::Arc;

use super::heuristic::extract_heuristic;
use super::normalize::normalize;
use super::parser::parse_model_response;
use super::prompt::{build_extraction_prompt, ACTION_ITEMS_SYSTEM_PROMPT};
use super::types::{ExtractionStrategy, LlmClient};
use super::ExtractError;
use crate::config::ExtractorConfig;

/// Action item extractor over a note text.
///
/// Holds the shared immutable configuration, the collaborator handle,
/// and the model name resolved at construction. Each `extract` call is
/// independent and stateless; instances are safe to share across
/// threads when the collaborator is.
pub struct ActionItemExtractor {
    config: Arc<ExtractorConfig>,
    llm: Box<dyn LlmClient + Send + Sync>,
    model: String,
    strategy: ExtractionStrategy,
}

impl ActionItemExtractor {
    pub fn new(
        config: Arc<ExtractorConfig>,
        llm: Box<dyn LlmClient + Send + Sync>,
        strategy: ExtractionStrategy,
    ) -> Self {
        let model = config.model.clone();
        Self {
            config,
            llm,
            model,
            strategy,
        }
    }

    /// Override the model chosen from configuration.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Extract action items according to the configured strategy.
    pub fn extract(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        match self.strategy {
            ExtractionStrategy::Heuristic => Ok(extract_heuristic(&self.config, text)),
            ExtractionStrategy::Model => self.extract_with_model(text),
            ExtractionStrategy::ModelWithFallback => self.extract_with_fallback(text, true),
        }
    }

    /// Delegate extraction to the collaborator: one call, no retries.
    ///
    /// Empty input returns immediately without touching the network. A
    /// response the parser cannot make sense of is a valid "no items"
    /// result; only transport-level failures return `Err`.
    pub fn extract_with_model(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_extraction_prompt(text);
        let response = self
            .llm
            .generate(&self.model, &prompt, ACTION_ITEMS_SYSTEM_PROMPT)?;

        let items = parse_model_response(&self.config.response_keys, &response);
        tracing::debug!(items = items.len(), model = %self.model, "model extraction complete");
        Ok(normalize(&items))
    }

    /// Model-assisted extraction with optional heuristic fallback.
    ///
    /// Falls back only on collaborator call failure — a successful call
    /// that yields no items is returned as-is.
    pub fn extract_with_fallback(
        &self,
        text: &str,
        use_fallback: bool,
    ) -> Result<Vec<String>, ExtractError> {
        match self.extract_with_model(text) {
            Ok(items) => Ok(items),
            Err(e) if use_fallback => {
                tracing::warn!(error = %e, "model extraction failed, falling back to heuristic");
                Ok(extract_heuristic(&self.config, text))
            }
            Err(e) => Err(e),
        }
    }
}
