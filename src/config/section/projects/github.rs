//! `[projects.github]` section configuration.
//!
//! Controls the github-sourced half of the project list: whether it is shown
//! at all, and whether it is discovered automatically from repository
//! metadata or curated by hand.
//!
//! # Example
//!
//! ```toml
//! [projects.github]
//! display = true
//! header = "Github Projects"
//! mode = "automatic"
//!
//! [projects.github.automatic]
//! sortBy = "stars"
//! limit = 8
//! exclude = { forks = true, projects = ["arifszn/art-template"] }
//!
//! [projects.github.manual]
//! projects = ["arifszn/gitprofile", "arifszn/pandora"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::resolve_enum;

// ============================================================================
// enums
// ============================================================================

/// Project selection mode.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Discover projects from repository metadata (default).
    #[default]
    Automatic,
    /// Use the authored `manual.projects` list verbatim.
    Manual,
}

impl Mode {
    /// Legal config values, in documentation order.
    pub const LEGAL: &'static [&'static str] = &["automatic", "manual"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "automatic" => Some(Self::Automatic),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Manual => "manual",
        }
    }
}

/// Sort key for automatically discovered projects.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Star count, descending (default).
    #[default]
    Stars,
    /// Last-updated timestamp, descending.
    Updated,
}

impl SortBy {
    /// Legal config values, in documentation order.
    pub const LEGAL: &'static [&'static str] = &["stars", "updated"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "stars" => Some(Self::Stars),
            "updated" => Some(Self::Updated),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Updated => "updated",
        }
    }
}

// ============================================================================
// automatic mode
// ============================================================================

/// Exclusion filters for automatic discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[config(section = "projects.github.automatic.exclude")]
pub struct ExcludeConfig {
    /// Drop forked repositories.
    pub forks: bool,
    /// Repository names ("owner/repo") never displayed. Exact match.
    pub projects: Vec<String>,
}

/// Automatic discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "projects.github.automatic")]
pub struct AutomaticConfig {
    /// Sort key: stars | updated.
    pub sort_by: SortBy,
    /// How many projects to display.
    pub limit: usize,
    /// Exclusion filters.
    pub exclude: ExcludeConfig,
}

impl Default for AutomaticConfig {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Stars,
            limit: 8,
            exclude: ExcludeConfig::default(),
        }
    }
}

/// Manual curation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[config(section = "projects.github.manual")]
pub struct ManualConfig {
    /// Repository names ("owner/repo") to display, in authored order.
    pub projects: Vec<String>,
}

// ============================================================================
// section root
// ============================================================================

/// The `[projects.github]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[config(section = "projects.github")]
pub struct GithubProjectsConfig {
    /// Display github-sourced projects at all.
    pub display: bool,
    /// Section header shown by the renderer.
    pub header: String,
    /// Selection mode: automatic | manual.
    pub mode: Mode,
    /// Automatic discovery settings (used when mode = "automatic").
    pub automatic: AutomaticConfig,
    /// Manual curation settings (used when mode = "manual").
    pub manual: ManualConfig,
}

impl Default for GithubProjectsConfig {
    fn default() -> Self {
        Self {
            display: true,
            header: "Github Projects".into(),
            mode: Mode::Automatic,
            automatic: AutomaticConfig::default(),
            manual: ManualConfig::default(),
        }
    }
}

// ============================================================================
// partial input
// ============================================================================

/// User-authored `[projects.github.automatic.exclude]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialExcludeConfig {
    pub forks: Option<bool>,
    pub projects: Option<Vec<String>>,
}

/// User-authored `[projects.github.automatic]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialAutomaticConfig {
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
    pub exclude: Option<PartialExcludeConfig>,
}

/// User-authored `[projects.github.manual]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialManualConfig {
    pub projects: Option<Vec<String>>,
}

/// User-authored `[projects.github]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialGithubProjectsConfig {
    pub display: Option<bool>,
    pub header: Option<String>,
    pub mode: Option<String>,
    pub automatic: Option<PartialAutomaticConfig>,
    pub manual: Option<PartialManualConfig>,
}

// ============================================================================
// resolution
// ============================================================================

impl ExcludeConfig {
    fn resolve(partial: PartialExcludeConfig) -> Self {
        Self {
            forks: partial.forks.unwrap_or(false),
            projects: partial.projects.unwrap_or_default(),
        }
    }
}

impl AutomaticConfig {
    fn resolve(partial: PartialAutomaticConfig, diag: &mut ConfigDiagnostics) -> Self {
        let defaults = Self::default();
        Self {
            sort_by: resolve_enum(
                partial.sort_by,
                Self::FIELDS.sort_by,
                SortBy::LEGAL,
                SortBy::parse,
                diag,
            ),
            // A negative limit clamps to an empty selection, not "unlimited".
            limit: partial
                .limit
                .map_or(defaults.limit, |v| usize::try_from(v).unwrap_or(0)),
            exclude: ExcludeConfig::resolve(partial.exclude.unwrap_or_default()),
        }
    }
}

impl GithubProjectsConfig {
    /// Apply user values over defaults; validate the mode and sort enums.
    pub fn resolve(partial: PartialGithubProjectsConfig, diag: &mut ConfigDiagnostics) -> Self {
        let defaults = Self::default();
        let resolved = Self {
            display: partial.display.unwrap_or(defaults.display),
            header: partial.header.unwrap_or(defaults.header),
            mode: resolve_enum(partial.mode, Self::FIELDS.mode, Mode::LEGAL, Mode::parse, diag),
            automatic: AutomaticConfig::resolve(partial.automatic.unwrap_or_default(), diag),
            manual: ManualConfig {
                projects: partial
                    .manual
                    .unwrap_or_default()
                    .projects
                    .unwrap_or_default(),
            },
        };
        resolved.warn_unused_branch(diag);
        resolved
    }

    /// Warn when the branch not selected by `mode` is authored anyway.
    ///
    /// The unused branch is kept as-is (switching `mode` back should not
    /// require re-authoring it), so this is a shape warning, not an error.
    fn warn_unused_branch(&self, diag: &mut ConfigDiagnostics) {
        match self.mode {
            Mode::Automatic => {
                if !self.manual.projects.is_empty() {
                    diag.warn(
                        ManualConfig::FIELDS.projects,
                        "authored but mode = \"automatic\"; the manual list is ignored",
                    );
                }
            }
            Mode::Manual => {
                if self.automatic != AutomaticConfig::default() {
                    diag.warn(
                        Self::FIELDS.automatic,
                        "authored but mode = \"manual\"; automatic settings are ignored",
                    );
                }
            }
        }
    }
}

impl From<GithubProjectsConfig> for PartialGithubProjectsConfig {
    fn from(resolved: GithubProjectsConfig) -> Self {
        Self {
            display: Some(resolved.display),
            header: Some(resolved.header),
            mode: Some(resolved.mode.as_str().into()),
            automatic: Some(PartialAutomaticConfig {
                sort_by: Some(resolved.automatic.sort_by.as_str().into()),
                limit: Some(resolved.automatic.limit as i64),
                exclude: Some(PartialExcludeConfig {
                    forks: Some(resolved.automatic.exclude.forks),
                    projects: Some(resolved.automatic.exclude.projects),
                }),
            }),
            manual: Some(PartialManualConfig {
                projects: Some(resolved.manual.projects),
            }),
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(partial: PartialGithubProjectsConfig) -> (GithubProjectsConfig, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let resolved = GithubProjectsConfig::resolve(partial, &mut diag);
        (resolved, diag)
    }

    #[test]
    fn test_defaults() {
        let (resolved, diag) = resolve(PartialGithubProjectsConfig::default());
        assert!(resolved.display);
        assert_eq!(resolved.header, "Github Projects");
        assert_eq!(resolved.mode, Mode::Automatic);
        assert_eq!(resolved.automatic.sort_by, SortBy::Stars);
        assert_eq!(resolved.automatic.limit, 8);
        assert!(!resolved.automatic.exclude.forks);
        assert!(resolved.automatic.exclude.projects.is_empty());
        assert!(resolved.manual.projects.is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_mode_is_error() {
        let (_, diag) = resolve(PartialGithubProjectsConfig {
            mode: Some("popularity".into()),
            ..Default::default()
        });
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "projects.github.mode");
    }

    #[test]
    fn test_unknown_sort_by_is_error_not_default() {
        let (_, diag) = resolve(PartialGithubProjectsConfig {
            automatic: Some(PartialAutomaticConfig {
                sort_by: Some("popularity".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "projects.github.automatic.sortBy"
        );
    }

    #[test]
    fn test_negative_limit_clamps_to_zero() {
        let (resolved, diag) = resolve(PartialGithubProjectsConfig {
            automatic: Some(PartialAutomaticConfig {
                limit: Some(-1),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(resolved.automatic.limit, 0);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_manual_authored_under_automatic_mode_warns() {
        let (_, diag) = resolve(PartialGithubProjectsConfig {
            manual: Some(PartialManualConfig {
                projects: Some(vec!["arifszn/gitprofile".into()]),
            }),
            ..Default::default()
        });
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].0.as_str(),
            "projects.github.manual.projects"
        );
    }

    #[test]
    fn test_automatic_authored_under_manual_mode_warns() {
        let (_, diag) = resolve(PartialGithubProjectsConfig {
            mode: Some("manual".into()),
            automatic: Some(PartialAutomaticConfig {
                limit: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_default_valued_unused_branch_does_not_warn() {
        // Authoring the unused branch with its default shape is not worth noise.
        let (_, diag) = resolve(PartialGithubProjectsConfig {
            mode: Some("manual".into()),
            automatic: Some(PartialAutomaticConfig {
                limit: Some(8),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(diag.warnings().is_empty());
    }
}
