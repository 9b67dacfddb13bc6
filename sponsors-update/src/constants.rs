// ABOUTME: Centralized constants for the sponsors updater
// ABOUTME: Contains pagination limits, the output path fragment, and the source template

/// Pagination limits
pub mod pagination {
    /// Number of sponsorship nodes requested per page
    pub const PAGE_SIZE: u32 = 100;

    /// Ceiling on fetched pages. A server that keeps answering
    /// `hasNextPage: true` fails the run instead of looping forever.
    pub const MAX_PAGES: u32 = 1000;
}

/// Output locations
pub mod output {
    /// Path of the generated file relative to the server checkout
    pub const SPONSORS_FILE_PATH: &str = "Sources/App/Core/CommunitySponsors.swift";
}

/// The fixed template wrapped around the rendered sponsor entries
pub mod template {
    pub const HEADER: &str = r#"// DO NOT EDIT!
// This file is auto-generated by update-sponsors.

struct CommunitySponsor {
    let login: String
    let name: String?
    let avatarUrl: String
}

extension CommunitySponsor {
    static let all: [CommunitySponsor] = [
"#;

    pub const FOOTER: &str = r#"    ]
}
"#;
}
