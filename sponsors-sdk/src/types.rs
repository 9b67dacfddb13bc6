// ABOUTME: Typed response shapes for the GitHub sponsorships query
// ABOUTME: Collapses the Organization/User entity union into a flat Sponsor record

use serde::{Deserialize, Serialize};

/// One sponsor entity as returned by the API.
///
/// The GraphQL union behind `sponsorEntity` matches either an Organization or
/// a User; both variants project the same three fields, so they collapse into
/// this single record with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub login: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl Sponsor {
    /// A sponsor can be rendered into the generated source file only when both
    /// a login and an avatar URL are present. The display name may be absent.
    pub fn is_renderable(&self) -> bool {
        self.login.is_some() && self.avatar_url.is_some()
    }
}

/// One page of sponsorship results plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorPage {
    pub sponsors: Vec<Sponsor>,
    pub has_next_page: bool,
    pub end_cursor: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SponsorQueryData {
    pub organization: Organization,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Organization {
    pub sponsorships_as_maintainer: SponsorshipsConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SponsorshipsConnection {
    pub page_info: PageInfo,
    pub nodes: Vec<SponsorshipNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub has_next_page: bool,
    // endCursor is null when the connection is empty
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SponsorshipNode {
    pub sponsor_entity: Option<Sponsor>,
}

impl SponsorQueryData {
    /// Flatten the nested connection into a page. A null sponsor entity keeps
    /// its slot as an empty (non-renderable) record so per-page node counts
    /// stay intact.
    pub(crate) fn into_page(self) -> SponsorPage {
        let connection = self.organization.sponsorships_as_maintainer;
        SponsorPage {
            sponsors: connection
                .nodes
                .into_iter()
                .map(|node| node.sponsor_entity.unwrap_or_default())
                .collect(),
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor.unwrap_or_default(),
        }
    }
}
