//! `[social]` section configuration.
//!
//! Social links shown on the profile card. Every field is a bare username
//! except `website` (a full URL) and `email` (an address); empty fields are
//! simply not rendered.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::check_http_url;

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Config)]
#[config(section = "social")]
pub struct SocialConfig {
    /// LinkedIn username, e.g. "ariful-alam".
    pub linkedin: String,
    /// Twitter username.
    pub twitter: String,
    /// Mastodon handle, e.g. "arifszn@mastodon.social".
    pub mastodon: String,
    /// Personal website URL.
    pub website: String,
    /// Contact email address.
    pub email: String,
}

/// User-authored `[social]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialSocialConfig {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub mastodon: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

impl SocialConfig {
    /// Apply user values over defaults.
    pub fn resolve(partial: PartialSocialConfig, diag: &mut ConfigDiagnostics) -> Self {
        let resolved = Self {
            linkedin: partial.linkedin.unwrap_or_default(),
            twitter: partial.twitter.unwrap_or_default(),
            mastodon: partial.mastodon.unwrap_or_default(),
            website: partial.website.unwrap_or_default(),
            email: partial.email.unwrap_or_default(),
        };
        check_http_url(&resolved.website, Self::FIELDS.website, diag);
        resolved
    }

    /// True when no link is set at all (the renderer hides the block).
    pub fn is_empty(&self) -> bool {
        self.linkedin.is_empty()
            && self.twitter.is_empty()
            && self.mastodon.is_empty()
            && self.website.is_empty()
            && self.email.is_empty()
    }
}

impl From<SocialConfig> for PartialSocialConfig {
    fn from(resolved: SocialConfig) -> Self {
        Self {
            linkedin: Some(resolved.linkedin),
            twitter: Some(resolved.twitter),
            mastodon: Some(resolved.mastodon),
            website: Some(resolved.website),
            email: Some(resolved.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_hide_block() {
        let mut diag = ConfigDiagnostics::new();
        let resolved = SocialConfig::resolve(PartialSocialConfig::default(), &mut diag);
        assert!(resolved.is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_website_must_be_http() {
        let mut diag = ConfigDiagnostics::new();
        SocialConfig::resolve(
            PartialSocialConfig {
                website: Some("ftp://www.arifszn.com".into()),
                ..Default::default()
            },
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "social.website");
    }
}
