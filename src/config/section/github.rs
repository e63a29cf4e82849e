//! `[github]` section configuration.
//!
//! The GitHub account everything else hangs off: the rendering layer fetches
//! the avatar and profile details for this user, and automatic project
//! discovery lists this user's repositories.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// GitHub account identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[config(section = "github")]
pub struct GithubConfig {
    /// GitHub org/user name, e.g. "arifszn".
    pub username: String,
}

/// User-authored `[github]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialGithubConfig {
    pub username: Option<String>,
}

impl GithubConfig {
    /// Apply user values over defaults.
    ///
    /// An absent or empty username is not an error (external projects still
    /// render without one), but every github-driven feature is inert, so it
    /// is worth a warning.
    pub fn resolve(partial: PartialGithubConfig, diag: &mut ConfigDiagnostics) -> Self {
        let resolved = Self {
            username: partial.username.unwrap_or_default(),
        };
        if resolved.username.is_empty() {
            diag.warn(
                Self::FIELDS.username,
                "empty; profile and automatic project discovery are disabled",
            );
        }
        resolved
    }
}

impl From<GithubConfig> for PartialGithubConfig {
    fn from(resolved: GithubConfig) -> Self {
        Self {
            username: Some(resolved.username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_resolved() {
        let mut diag = ConfigDiagnostics::new();
        let resolved = GithubConfig::resolve(
            PartialGithubConfig {
                username: Some("arifszn".into()),
            },
            &mut diag,
        );
        assert_eq!(resolved.username, "arifszn");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_missing_username_warns_but_resolves() {
        let mut diag = ConfigDiagnostics::new();
        let resolved = GithubConfig::resolve(PartialGithubConfig::default(), &mut diag);
        assert_eq!(resolved.username, "");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
