// ABOUTME: GraphQL abstraction layer providing the page source trait and query builder
// ABOUTME: Builds variable-bound request bodies for the GitHub sponsorships query

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SponsorsError;
use crate::types::SponsorPage;

/// The sponsorships query. Page size and cursor are bound as GraphQL
/// variables; interpolating the cursor into the document as a quoted literal
/// would let a hostile cursor value break out of the string.
pub const SPONSOR_PAGE_QUERY: &str = r#"
query SponsorPage($login: String!, $first: Int!, $after: String) {
  organization(login: $login) {
    sponsorshipsAsMaintainer(first: $first, after: $after, includePrivate: false) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        sponsorEntity {
          ... on Organization {
            login
            name
            avatarUrl
          }
          ... on User {
            login
            name
            avatarUrl
          }
        }
      }
    }
  }
}
"#;

/// Trait for fetching one page of sponsorships
///
/// The aggregation loop in the updater is written against this trait so it
/// can be exercised with scripted fakes instead of a live endpoint.
#[async_trait]
pub trait SponsorPageSource: Send + Sync {
    /// Fetch one page of sponsors. An empty cursor requests the first page.
    async fn fetch_page(&self, page_size: u32, cursor: &str) -> Result<SponsorPage, SponsorsError>;
}

/// Builder for a GraphQL request body with a variables map
#[derive(Debug, Clone, Serialize)]
pub struct QueryBuilder {
    query: String,
    variables: HashMap<String, serde_json::Value>,
}

impl QueryBuilder {
    /// Create a new query builder
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: HashMap::new(),
        }
    }

    /// Add a variable to the query
    pub fn variable<T: serde::Serialize>(mut self, name: impl Into<String>, value: T) -> Self {
        self.variables.insert(
            name.into(),
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        );
        self
    }

    /// Get the query string
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the variables
    pub fn variables(&self) -> &HashMap<String, serde_json::Value> {
        &self.variables
    }
}

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder_serializes_query_and_variables() {
        let builder = QueryBuilder::new(SPONSOR_PAGE_QUERY)
            .variable("login", "swiftpackageindex")
            .variable("first", 100)
            .variable("after", serde_json::Value::Null);

        assert_eq!(builder.query(), SPONSOR_PAGE_QUERY);
        assert_eq!(builder.variables().len(), 3);

        let body = serde_json::to_value(&builder).unwrap();
        assert_eq!(body["query"], SPONSOR_PAGE_QUERY);
        assert_eq!(body["variables"]["login"], "swiftpackageindex");
        assert_eq!(body["variables"]["first"], 100);
        assert!(body["variables"]["after"].is_null());
    }

    #[test]
    fn test_query_document_binds_cursor_as_variable() {
        // The cursor must never be spliced into the document text
        assert!(SPONSOR_PAGE_QUERY.contains("$after: String"));
        assert!(SPONSOR_PAGE_QUERY.contains("after: $after"));
        assert!(SPONSOR_PAGE_QUERY.contains("$first: Int!"));
        assert!(SPONSOR_PAGE_QUERY.contains("$login: String!"));
    }

    #[test]
    fn test_query_document_covers_both_entity_shapes() {
        assert!(SPONSOR_PAGE_QUERY.contains("... on Organization"));
        assert!(SPONSOR_PAGE_QUERY.contains("... on User"));
        assert!(SPONSOR_PAGE_QUERY.contains("includePrivate: false"));
    }

    #[test]
    fn test_graphql_response_decodes_errors() {
        let response: GraphQlResponse<serde_json::Value> = serde_json::from_value(
            serde_json::json!({
                "errors": [{ "message": "Could not resolve to an Organization" }]
            }),
        )
        .unwrap();

        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Could not resolve to an Organization");
    }
}
