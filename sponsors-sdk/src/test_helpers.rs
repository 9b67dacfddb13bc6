// ABOUTME: Test helper utilities for mocking GitHub sponsorship API responses
// ABOUTME: Provides canned JSON bodies for unit testing the page fetch path

#[cfg(test)]
use serde_json::json;

#[cfg(test)]
pub fn mock_sponsor_page_response(
    nodes: Vec<serde_json::Value>,
    has_next_page: bool,
    end_cursor: &str,
) -> serde_json::Value {
    json!({
        "data": {
            "organization": {
                "sponsorshipsAsMaintainer": {
                    "pageInfo": {
                        "hasNextPage": has_next_page,
                        "endCursor": end_cursor
                    },
                    "nodes": nodes
                }
            }
        }
    })
}

#[cfg(test)]
pub fn mock_empty_page_response() -> serde_json::Value {
    json!({
        "data": {
            "organization": {
                "sponsorshipsAsMaintainer": {
                    "pageInfo": {
                        "hasNextPage": false,
                        "endCursor": null
                    },
                    "nodes": []
                }
            }
        }
    })
}
