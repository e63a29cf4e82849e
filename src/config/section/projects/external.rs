//! `[projects.external]` section configuration.
//!
//! Projects authored directly in the config file, never sourced from
//! repository metadata. They are appended after the github-sourced list,
//! in authored order, and pass through resolution unchanged.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::http_url_error;

/// A hand-authored project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalProject {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// URL for the project image.
    pub image_url: String,
    /// URL to the project.
    pub link: String,
}

/// The `[projects.external]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[config(section = "projects.external")]
pub struct ExternalProjectsConfig {
    /// Section header shown by the renderer.
    pub header: String,
    /// Project cards, in display order.
    pub projects: Vec<ExternalProject>,
}

impl Default for ExternalProjectsConfig {
    fn default() -> Self {
        Self {
            header: "My Projects".into(),
            projects: Vec::new(),
        }
    }
}

/// User-authored `[projects.external]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialExternalProjectsConfig {
    pub header: Option<String>,
    pub projects: Option<Vec<ExternalProject>>,
}

impl ExternalProjectsConfig {
    /// Apply user values over defaults.
    ///
    /// The authored sequence fully replaces the default (no element-wise
    /// merge). Entry URLs must be http(s) when non-empty.
    pub fn resolve(partial: PartialExternalProjectsConfig, diag: &mut ConfigDiagnostics) -> Self {
        let defaults = Self::default();
        let resolved = Self {
            header: partial.header.unwrap_or(defaults.header),
            projects: partial.projects.unwrap_or_default(),
        };
        for (i, project) in resolved.projects.iter().enumerate() {
            if let Some(problem) = http_url_error(&project.link) {
                diag.error(Self::FIELDS.projects, format!("entry {i}: link: {problem}"));
            }
            if let Some(problem) = http_url_error(&project.image_url) {
                diag.error(
                    Self::FIELDS.projects,
                    format!("entry {i}: imageUrl: {problem}"),
                );
            }
        }
        resolved
    }
}

impl From<ExternalProjectsConfig> for PartialExternalProjectsConfig {
    fn from(resolved: ExternalProjectsConfig) -> Self {
        Self {
            header: Some(resolved.header),
            projects: Some(resolved.projects),
        }
    }
}
