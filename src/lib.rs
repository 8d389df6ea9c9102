//! taskmine — heuristic and LLM-assisted extraction of action items
//! from free-form note text.
//!
//! The engine takes a string and returns an ordered, case-insensitively
//! deduplicated list of candidate action items. Two strategies sit
//! behind one interface: a pattern/keyword heuristic with no
//! dependencies, and a model-assisted path that prompts a local Ollama
//! instance and degrades gracefully — optionally all the way back to
//! the heuristic — when the collaborator or its output misbehaves.
//! Persistence, routing, and serialization of results are caller
//! concerns.

pub mod config;
pub mod extract;

pub use config::ExtractorConfig;
pub use extract::{
    extract_heuristic, ActionItemExtractor, ExtractError, ExtractionStrategy, LlmClient,
    MockLlmClient, OllamaClient,
};
