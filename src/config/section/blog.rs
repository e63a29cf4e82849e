//! `[blog]` section configuration.
//!
//! Recent articles pulled from a blogging platform by the rendering layer.
//! An empty username hides the section entirely.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::resolve_enum;

/// Most articles the renderer will request.
pub const MAX_BLOG_LIMIT: usize = 10;

/// Blog article source platform.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlogSource {
    /// medium.com (default).
    #[default]
    Medium,
    /// dev.to.
    Dev,
}

impl BlogSource {
    /// Legal config values, in documentation order.
    pub const LEGAL: &'static [&'static str] = &["medium", "dev"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "medium" => Some(Self::Medium),
            "dev" => Some(Self::Dev),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Dev => "dev",
        }
    }
}

/// The `[blog]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[config(section = "blog")]
pub struct BlogConfig {
    /// Article source: medium | dev.
    pub source: BlogSource,
    /// Username on the source platform. Empty hides the blog section.
    pub username: String,
    /// How many articles to display, capped at [`MAX_BLOG_LIMIT`].
    pub limit: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            source: BlogSource::Medium,
            username: String::new(),
            limit: 5,
        }
    }
}

/// User-authored `[blog]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialBlogConfig {
    pub source: Option<String>,
    pub username: Option<String>,
    pub limit: Option<i64>,
}

impl BlogConfig {
    /// Apply user values over defaults; validate the source enum.
    ///
    /// `limit` is clamped into `0..=10` rather than rejected: the platform
    /// feeds never return more than ten entries, so over-asking is harmless
    /// authoring, not a configuration mistake.
    pub fn resolve(partial: PartialBlogConfig, diag: &mut ConfigDiagnostics) -> Self {
        let defaults = Self::default();
        Self {
            source: resolve_enum(
                partial.source,
                Self::FIELDS.source,
                BlogSource::LEGAL,
                BlogSource::parse,
                diag,
            ),
            username: partial.username.unwrap_or_default(),
            limit: partial.limit.map_or(defaults.limit, |v| {
                usize::try_from(v).unwrap_or(0).min(MAX_BLOG_LIMIT)
            }),
        }
    }

    /// True when the renderer should show the blog section.
    pub fn enabled(&self) -> bool {
        !self.username.is_empty() && self.limit > 0
    }
}

impl From<BlogConfig> for PartialBlogConfig {
    fn from(resolved: BlogConfig) -> Self {
        Self {
            source: Some(resolved.source.as_str().into()),
            username: Some(resolved.username),
            limit: Some(resolved.limit as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(partial: PartialBlogConfig) -> (BlogConfig, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let resolved = BlogConfig::resolve(partial, &mut diag);
        (resolved, diag)
    }

    #[test]
    fn test_defaults_hide_section() {
        let (resolved, diag) = resolve(PartialBlogConfig::default());
        assert_eq!(resolved.source, BlogSource::Medium);
        assert_eq!(resolved.username, "");
        assert_eq!(resolved.limit, 5);
        assert!(!resolved.enabled());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_username_enables_section() {
        let (resolved, _) = resolve(PartialBlogConfig {
            source: Some("dev".into()),
            username: Some("arifszn".into()),
            limit: Some(2),
        });
        assert_eq!(resolved.source, BlogSource::Dev);
        assert!(resolved.enabled());
        assert_eq!(resolved.limit, 2);
    }

    #[test]
    fn test_unknown_source_is_error_not_default() {
        let (_, diag) = resolve(PartialBlogConfig {
            source: Some("rss".into()),
            ..Default::default()
        });
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "blog.source");
    }

    #[test]
    fn test_limit_clamped_not_rejected() {
        let (over, diag) = resolve(PartialBlogConfig {
            limit: Some(25),
            ..Default::default()
        });
        assert_eq!(over.limit, MAX_BLOG_LIMIT);
        assert!(diag.is_empty());

        let (under, diag) = resolve(PartialBlogConfig {
            limit: Some(-3),
            ..Default::default()
        });
        assert_eq!(under.limit, 0);
        assert!(diag.is_empty());
    }
}
