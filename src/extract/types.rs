use super::ExtractError;

/// Text-generation collaborator abstraction (allows mocking).
///
/// Implementations take a (system instruction, user prompt) pair plus a
/// model identifier and return the raw response text. Transport
/// concerns — timeouts, connection failures, non-2xx statuses — surface
/// as `ExtractError` values; all of them count as a call failure to the
/// fallback logic.
pub trait LlmClient {
    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, ExtractError>;

    fn is_model_available(&self, model: &str) -> Result<bool, ExtractError>;

    fn list_models(&self) -> Result<Vec<String>, ExtractError>;
}

/// How an extraction request is served. Closed set, matched
/// exhaustively — adding a strategy means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Pattern/keyword classification only; never touches the network.
    Heuristic,
    /// Collaborator only; call failures propagate to the caller.
    Model,
    /// Collaborator first, heuristic on call failure.
    ModelWithFallback,
}
