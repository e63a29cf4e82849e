//! `[projects]` section configuration.
//!
//! Two sub-sections feed the final project list: `[projects.github]`
//! (discovered or curated repositories) and `[projects.external]`
//! (hand-authored cards, appended after the github-sourced entries).
//!
//! # Example
//!
//! ```toml
//! [projects.github]
//! display = true
//! mode = "automatic"
//!
//! [projects.github.automatic]
//! sortBy = "stars"
//! limit = 8
//!
//! [projects.external]
//! header = "My Projects"
//!
//! [[projects.external.projects]]
//! title = "Project Name"
//! description = "Short blurb."
//! imageUrl = "https://example.com/image.jpg"
//! link = "https://example.com"
//! ```

mod external;
mod github;

pub use external::{ExternalProject, ExternalProjectsConfig, PartialExternalProjectsConfig};
pub use github::{
    AutomaticConfig, ExcludeConfig, GithubProjectsConfig, ManualConfig, Mode,
    PartialAutomaticConfig, PartialExcludeConfig, PartialGithubProjectsConfig,
    PartialManualConfig, SortBy,
};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// The `[projects]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectsConfig {
    /// Github-sourced projects (automatic discovery or manual curation).
    pub github: GithubProjectsConfig,
    /// Hand-authored projects, appended unconditionally.
    pub external: ExternalProjectsConfig,
}

/// User-authored `[projects]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialProjectsConfig {
    pub github: Option<PartialGithubProjectsConfig>,
    pub external: Option<PartialExternalProjectsConfig>,
}

impl ProjectsConfig {
    /// Apply user values over defaults.
    pub fn resolve(partial: PartialProjectsConfig, diag: &mut ConfigDiagnostics) -> Self {
        Self {
            github: GithubProjectsConfig::resolve(partial.github.unwrap_or_default(), diag),
            external: ExternalProjectsConfig::resolve(partial.external.unwrap_or_default(), diag),
        }
    }
}

impl From<ProjectsConfig> for PartialProjectsConfig {
    fn from(resolved: ProjectsConfig) -> Self {
        Self {
            github: Some(resolved.github.into()),
            external: Some(resolved.external.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_section_resolves_to_default_shape() {
        let mut diag = ConfigDiagnostics::new();
        let resolved = ProjectsConfig::resolve(PartialProjectsConfig::default(), &mut diag);
        assert_eq!(resolved, ProjectsConfig::default());
        assert!(diag.is_empty());
    }
}
