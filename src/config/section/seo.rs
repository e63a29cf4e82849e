//! `[seo]` section configuration.
//!
//! Metadata the rendering layer injects into the generated page head.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::check_http_url;

/// Search-engine and social-preview metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[config(section = "seo")]
pub struct SeoConfig {
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Social-preview image URL.
    #[serde(rename = "imageURL")]
    #[config(name = "imageURL")]
    pub image_url: String,
}

/// User-authored `[seo]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialSeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

impl SeoConfig {
    /// Apply user values over defaults.
    pub fn resolve(partial: PartialSeoConfig, diag: &mut ConfigDiagnostics) -> Self {
        let resolved = Self {
            title: partial.title.unwrap_or_default(),
            description: partial.description.unwrap_or_default(),
            image_url: partial.image_url.unwrap_or_default(),
        };
        check_http_url(&resolved.image_url, Self::FIELDS.image_url, diag);
        resolved
    }
}

impl From<SeoConfig> for PartialSeoConfig {
    fn from(resolved: SeoConfig) -> Self {
        Self {
            title: Some(resolved.title),
            description: Some(resolved.description),
            image_url: Some(resolved.image_url),
        }
    }
}
