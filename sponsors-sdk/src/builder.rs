// ABOUTME: Builder pattern implementation for SponsorsClient configuration
// ABOUTME: Provides type-safe configuration with compile-time required token

use crate::SponsorsClient;
use crate::constants::timeouts;
use crate::error::SponsorsError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<SponsorsClient, SponsorsError>))]
pub struct SponsorsClientConfig {
    pub auth_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// Override of the API base URL, used by tests to point at a mock server
    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<SponsorsClientConfig> for Result<SponsorsClient, SponsorsError> {
    fn from(config: SponsorsClientConfig) -> Self {
        SponsorsClient::from_config(config)
    }
}

impl SponsorsClient {
    pub fn builder() -> SponsorsClientConfigBuilder<((), (), ())> {
        SponsorsClientConfig::builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn token() -> SecretString {
        SecretString::new("test-api-token".to_string().into_boxed_str())
    }

    #[test]
    fn test_builder_with_minimal_config() {
        let client_result = SponsorsClient::builder().auth_token(token()).build();
        assert!(client_result.is_ok());
    }

    #[test]
    fn test_builder_with_all_options() {
        let client_result = SponsorsClient::builder()
            .auth_token(token())
            .timeout(Duration::from_secs(60))
            .base_url(Some("http://127.0.0.1:9999".to_string()))
            .build();

        assert!(client_result.is_ok());
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = SponsorsClient::builder()
            .auth_token(token())
            .base_url(Some("not-a-url".to_string()))
            .build();

        match result {
            Err(SponsorsError::Configuration(msg)) => {
                assert!(msg.contains("base URL"));
            }
            _ => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_config_uses_secrecy_for_sensitive_data() {
        let api_token = token();
        let debug_str = format!("{:?}", api_token);
        assert!(!debug_str.contains("test-api-token"));
    }
}
