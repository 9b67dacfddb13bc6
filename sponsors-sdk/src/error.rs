// ABOUTME: Custom error types for the sponsors SDK with user-friendly messages
// ABOUTME: Covers transport, decode, and GraphQL failure modes of the GitHub API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SponsorsError {
    #[error("expected a 2xx response, got HTTP {status}")]
    Transport { status: u16 },

    #[error("response body did not match the expected shape: {0}")]
    Decode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl SponsorsError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            SponsorsError::Transport { status: 401 } | SponsorsError::Transport { status: 403 } => {
                Some("Check that the GitHub API token is valid and has the read:org scope")
            }
            SponsorsError::Network(_) => Some("Check your internet connection and try again"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SponsorsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SponsorsError::Decode(err.to_string())
        } else {
            SponsorsError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SponsorsError {
    fn from(err: serde_json::Error) -> Self {
        SponsorsError::Decode(err.to_string())
    }
}
