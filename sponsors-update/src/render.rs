// ABOUTME: Deterministic rendering of aggregated sponsors into Swift source text
// ABOUTME: Emits one CommunitySponsor entry per renderable sponsor between header and footer

use sponsors_sdk::Sponsor;

use crate::update::UpdateConfig;

/// Render the full generated document: header, one entry per renderable
/// sponsor in list order, footer. Sponsors missing a login or avatar URL are
/// skipped without comment.
pub fn render_sponsors_file(sponsors: &[Sponsor], config: &UpdateConfig) -> String {
    let mut output = String::from(config.header);
    for sponsor in sponsors {
        if let (Some(login), Some(avatar_url)) = (&sponsor.login, &sponsor.avatar_url) {
            output.push_str("        CommunitySponsor(\n");
            output.push_str(&format!(
                "            login: \"{}\",\n",
                escape_swift_string(login)
            ));
            output.push_str(&format!(
                "            name: {},\n",
                name_or_nil(sponsor.name.as_deref())
            ));
            output.push_str(&format!(
                "            avatarUrl: \"{}\"\n",
                escape_swift_string(avatar_url)
            ));
            output.push_str("        ),\n");
        }
    }
    output.push_str(config.footer);
    output
}

/// Quoted Swift string literal for a present name, the literal `nil` otherwise
fn name_or_nil(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("\"{}\"", escape_swift_string(name)),
        None => "nil".to_string(),
    }
}

/// Escape a value for inclusion in a Swift string literal. Display names come
/// straight from the API, so quotes and backslashes must not break the
/// generated source.
pub fn escape_swift_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
