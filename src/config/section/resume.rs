//! `[resume]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::check_http_url;

/// Resume download settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "resume")]
pub struct ResumeConfig {
    /// URL for the resume file. Empty hides the download button.
    pub file_url: String,
}

/// User-authored `[resume]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialResumeConfig {
    pub file_url: Option<String>,
}

impl ResumeConfig {
    /// Apply user values over defaults.
    pub fn resolve(partial: PartialResumeConfig, diag: &mut ConfigDiagnostics) -> Self {
        let resolved = Self {
            file_url: partial.file_url.unwrap_or_default(),
        };
        check_http_url(&resolved.file_url, Self::FIELDS.file_url, diag);
        resolved
    }

    /// True when the renderer should show the download button.
    pub fn display(&self) -> bool {
        !self.file_url.is_empty()
    }
}

impl From<ResumeConfig> for PartialResumeConfig {
    fn from(resolved: ResumeConfig) -> Self {
        Self {
            file_url: Some(resolved.file_url),
        }
    }
}
