pub mod heuristic;
pub mod normalize;
pub mod ollama;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod rules;
pub mod types;

pub use heuristic::*;
pub use normalize::*;
pub use ollama::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use rules::*;
pub use types::*;

use thiserror::Error;

/// Failures of the model-assisted path. Every variant except `Io` is a
/// collaborator call failure and triggers the heuristic fallback when
/// one is enabled. Unparseable response *content* is deliberately not
/// represented here — it parses as an empty item list instead.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Ollama is not running at {0}")]
    OllamaConnection(String),

    #[error("Ollama returned error (status {status}): {body}")]
    OllamaError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
