//! Trivia Configuration

use std::time::Duration;

/// Default difficulty applied when the client does not specify one
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Trivia configuration
#[derive(Debug, Clone)]
pub struct TriviaConfig {
    /// Chat-completions endpoint of the external generator
    pub generator_url: String,
    /// API key sent as a bearer credential to the generator
    pub generator_api_key: String,
    /// Model identifier passed through to the generator
    pub generator_model: String,
    /// Per-call timeout; a stuck generator must not stall other requests
    pub generator_timeout: Duration,
    /// Difficulty used when the client omits the parameter
    pub default_difficulty: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            generator_url: "https://api.openai.com/v1/chat/completions".to_string(),
            generator_api_key: String::new(),
            generator_model: "gpt-4o-mini".to_string(),
            generator_timeout: Duration::from_secs(30),
            default_difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }
}

impl TriviaConfig {
    /// Development configuration (no API key; calls will fail fast)
    pub fn development() -> Self {
        Self::default()
    }
}
