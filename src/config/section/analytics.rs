//! `[googleAnalytics]` and `[hotjar]` section configuration.
//!
//! Identifiers only; snippet injection is the rendering layer's job.
//! An empty id leaves the corresponding snippet out.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Google Analytics settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[config(section = "googleAnalytics")]
pub struct GoogleAnalyticsConfig {
    /// GA3 tracking id / GA4 tag id: UA-XXXXXXXXX-X | G-XXXXXXXXXX.
    pub id: String,
}

/// User-authored `[googleAnalytics]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialGoogleAnalyticsConfig {
    pub id: Option<String>,
}

impl GoogleAnalyticsConfig {
    /// Apply user values over defaults.
    pub fn resolve(partial: PartialGoogleAnalyticsConfig) -> Self {
        Self {
            id: partial.id.unwrap_or_default(),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.id.is_empty()
    }
}

impl From<GoogleAnalyticsConfig> for PartialGoogleAnalyticsConfig {
    fn from(resolved: GoogleAnalyticsConfig) -> Self {
        Self {
            id: Some(resolved.id),
        }
    }
}

/// Hotjar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "hotjar")]
pub struct HotjarConfig {
    /// Hotjar site ID.
    pub id: String,
    /// Hotjar snippet version.
    pub snippet_version: u32,
}

impl Default for HotjarConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            snippet_version: 6,
        }
    }
}

/// User-authored `[hotjar]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialHotjarConfig {
    pub id: Option<String>,
    pub snippet_version: Option<u32>,
}

impl HotjarConfig {
    /// Apply user values over defaults.
    pub fn resolve(partial: PartialHotjarConfig) -> Self {
        let defaults = Self::default();
        Self {
            id: partial.id.unwrap_or_default(),
            snippet_version: partial.snippet_version.unwrap_or(defaults.snippet_version),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.id.is_empty()
    }
}

impl From<HotjarConfig> for PartialHotjarConfig {
    fn from(resolved: HotjarConfig) -> Self {
        Self {
            id: Some(resolved.id),
            snippet_version: Some(resolved.snippet_version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sections_disable_snippets() {
        let ga = GoogleAnalyticsConfig::resolve(PartialGoogleAnalyticsConfig::default());
        assert!(!ga.enabled());

        let hotjar = HotjarConfig::resolve(PartialHotjarConfig::default());
        assert!(!hotjar.enabled());
        assert_eq!(hotjar.snippet_version, 6);
    }

    #[test]
    fn test_ids_enable_snippets() {
        let ga = GoogleAnalyticsConfig::resolve(PartialGoogleAnalyticsConfig {
            id: Some("G-XXXXXXXXXX".into()),
        });
        assert!(ga.enabled());

        let hotjar = HotjarConfig::resolve(PartialHotjarConfig {
            id: Some("1234567".into()),
            snippet_version: None,
        });
        assert!(hotjar.enabled());
    }
}
