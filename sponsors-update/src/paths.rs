// ABOUTME: Filesystem path helpers for the sponsors updater
// ABOUTME: Expands a leading tilde and resolves the generated file destination

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the invoking user's home directory.
/// Anything else, including `~user` forms, passes through unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Full path of the generated sponsors file beneath the output directory
pub fn output_file_path(output_dir: &str, fragment: &str) -> PathBuf {
    expand_tilde(output_dir).join(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_resolves_home() {
        let home = dirs::home_dir().expect("test environment should have a home directory");
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/checkout"), home.join("checkout"));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/srv/spi-server"), PathBuf::from("/srv/spi-server"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
        // ~user expansion is not supported
        assert_eq!(expand_tilde("~other"), PathBuf::from("~other"));
    }

    #[test]
    fn test_output_file_path_joins_fragment() {
        let path = output_file_path("/srv/spi-server", "Sources/App/Core/CommunitySponsors.swift");
        assert_eq!(
            path,
            PathBuf::from("/srv/spi-server/Sources/App/Core/CommunitySponsors.swift")
        );
    }

    #[test]
    fn test_output_file_path_expands_tilde() {
        let home = dirs::home_dir().expect("test environment should have a home directory");
        let path = output_file_path("~/spi-server", "Sources/App/Core/CommunitySponsors.swift");
        assert!(path.starts_with(home));
    }
}
