// ABOUTME: Sponsors SDK library providing a typed GraphQL client for GitHub Sponsors
// ABOUTME: Fetches one page of an organization's sponsorships per call

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use url::Url;

pub mod builder;
pub mod constants;
pub mod error;
pub mod graphql;
mod test_helpers;
pub mod types;

pub use builder::SponsorsClientConfig;
pub use error::SponsorsError;
pub use graphql::{QueryBuilder, SPONSOR_PAGE_QUERY, SponsorPageSource};
pub use types::{Sponsor, SponsorPage};

use async_trait::async_trait;
use graphql::GraphQlResponse;
use types::SponsorQueryData;

pub type Result<T> = std::result::Result<T, SponsorsError>;

/// Client for the GitHub GraphQL API, scoped to the sponsorships query
pub struct SponsorsClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SponsorsClient {
    /// Create a client with default configuration
    pub fn new(auth_token: secrecy::SecretString) -> Result<Self> {
        Self::builder().auth_token(auth_token).build()
    }

    pub(crate) fn from_config(config: SponsorsClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth_value =
            HeaderValue::from_str(&format!("bearer {}", config.auth_token.expose_secret()))
                .map_err(|e| {
                    SponsorsError::Configuration(format!("invalid characters in API token: {e}"))
                })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("update-sponsors/0.1.0"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SponsorsError::Configuration(e.to_string()))?;

        let base = config
            .base_url
            .unwrap_or_else(|| constants::urls::GITHUB_API_BASE.to_string());
        let endpoint = Url::parse(&format!(
            "{}{}",
            base.trim_end_matches('/'),
            constants::urls::GRAPHQL_PATH
        ))
        .map_err(|e| SponsorsError::Configuration(format!("invalid base URL: {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Fetch one page of the organization's sponsorships.
    ///
    /// An empty cursor requests the first page; otherwise the cursor is bound
    /// to the `$after` query variable. Non-2xx responses and bodies that do
    /// not decode are both fatal; there is no retry.
    pub async fn fetch_sponsor_page(&self, page_size: u32, cursor: &str) -> Result<SponsorPage> {
        let after = if cursor.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(cursor.to_string())
        };
        let request_body = QueryBuilder::new(SPONSOR_PAGE_QUERY)
            .variable("login", constants::github::SPONSORED_ORGANIZATION)
            .variable("first", page_size)
            .variable("after", after);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SponsorsError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let response_body: GraphQlResponse<SponsorQueryData> = serde_json::from_str(&body)?;

        if let Some(errors) = response_body.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(SponsorsError::GraphQl(messages.join("; ")));
            }
        }

        let data = response_body
            .data
            .ok_or_else(|| SponsorsError::Decode("no data in response".to_string()))?;

        let page = data.into_page();
        debug!(
            "fetched sponsor page: {} nodes, has_next_page={}",
            page.sponsors.len(),
            page.has_next_page
        );
        Ok(page)
    }
}

#[async_trait]
impl SponsorPageSource for SponsorsClient {
    async fn fetch_page(&self, page_size: u32, cursor: &str) -> Result<SponsorPage> {
        self.fetch_sponsor_page(page_size, cursor).await
    }
}
