// ABOUTME: Centralized constants for the sponsors SDK
// ABOUTME: Contains GitHub API URLs, the sponsored organization, and timeouts

/// GitHub API URLs
pub mod urls {
    /// Base URL for the GitHub API
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// Path of the GraphQL endpoint under the API base
    pub const GRAPHQL_PATH: &str = "/graphql";
}

/// Query constants
pub mod github {
    /// The organization whose sponsorships are fetched
    pub const SPONSORED_ORGANIZATION: &str = "swiftpackageindex";
}

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_url_constants() {
        assert!(urls::GITHUB_API_BASE.starts_with("https://"));
        assert!(urls::GRAPHQL_PATH.starts_with('/'));
    }

    #[test]
    fn test_github_constants() {
        assert_eq!(github::SPONSORED_ORGANIZATION, "swiftpackageindex");
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::HTTP_REQUEST_TIMEOUT, Duration::from_secs(30));
    }
}
