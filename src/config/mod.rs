//! Portfolio configuration management for `gitfolio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── github     # [github]
//! │   ├── projects/  # [projects.github], [projects.external]
//! │   ├── seo        # [seo]
//! │   ├── social     # [social]
//! │   ├── resume     # [resume]
//! │   ├── career     # [[experiences]], [[educations]], ...
//! │   ├── blog       # [blog]
//! │   ├── analytics  # [googleAnalytics], [hotjar]
//! │   └── theme      # [themeConfig]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util           # Config file search, field checks
//! └── mod.rs         # PortfolioConfig (this file)
//! ```
//!
//! # Resolution contract
//!
//! Everything optional on input, nothing optional after resolution:
//! [`PartialPortfolioConfig`] (every field and section optional, the shape
//! users author) resolves into [`PortfolioConfig`] (every leaf populated
//! with the user's value or its documented default). Missing fields are
//! never errors; present fields with values outside a closed enum set are.

pub mod section;
pub mod types;
pub mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    AutomaticConfig, BlogConfig, BlogSource, Certification, CustomThemeConfig, DEFAULT_THEMES,
    Education, ExcludeConfig, Experience, ExternalProject, ExternalProjectsConfig, GithubConfig,
    GithubProjectsConfig, GoogleAnalyticsConfig, HotjarConfig, MAX_BLOG_LIMIT, ManualConfig, Mode,
    ProjectsConfig, Publication, ResumeConfig, SeoConfig, SocialConfig, SortBy, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use section::{
    PartialBlogConfig, PartialGithubConfig, PartialGoogleAnalyticsConfig, PartialHotjarConfig,
    PartialProjectsConfig, PartialResumeConfig, PartialSeoConfig, PartialSocialConfig,
    PartialThemeConfig,
};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::Path,
    sync::LazyLock,
};

/// The documented default for every field, constructed once.
///
/// Resolution against an empty partial yields exactly this value.
pub static DEFAULTS: LazyLock<PortfolioConfig> = LazyLock::new(PortfolioConfig::default);

// ============================================================================
// resolved configuration
// ============================================================================

/// Fully resolved configuration: every leaf holds the user's value or its
/// documented default. Serializes with the user-facing (camelCase) field
/// names so the rendering layer sees the same schema users author.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// GitHub account identity.
    pub github: GithubConfig,

    /// Base URL path for deployment, e.g. "/gitprofile/".
    pub base: String,

    /// Project list sources.
    pub projects: ProjectsConfig,

    /// Page head metadata.
    pub seo: SeoConfig,

    /// Social profile links.
    pub social: SocialConfig,

    /// Resume download settings.
    pub resume: ResumeConfig,

    /// List of skills.
    pub skills: Vec<String>,

    /// Work experiences.
    pub experiences: Vec<Experience>,

    /// Certifications.
    pub certifications: Vec<Certification>,

    /// Educational qualifications.
    pub educations: Vec<Education>,

    /// Publications.
    pub publications: Vec<Publication>,

    /// Recent-articles section.
    pub blog: BlogConfig,

    /// Google Analytics identifier.
    pub google_analytics: GoogleAnalyticsConfig,

    /// Hotjar identifier.
    pub hotjar: HotjarConfig,

    /// Theme selection and palette.
    pub theme_config: ThemeConfig,

    /// Footer text or HTML.
    pub footer: String,

    /// Enable Progressive Web App features.
    #[serde(rename = "enablePWA")]
    pub enable_pwa: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            base: "/".into(),
            projects: ProjectsConfig::default(),
            seo: SeoConfig::default(),
            social: SocialConfig::default(),
            resume: ResumeConfig::default(),
            skills: Vec::new(),
            experiences: Vec::new(),
            certifications: Vec::new(),
            educations: Vec::new(),
            publications: Vec::new(),
            blog: BlogConfig::default(),
            google_analytics: GoogleAnalyticsConfig::default(),
            hotjar: HotjarConfig::default(),
            theme_config: ThemeConfig::default(),
            footer: String::new(),
            enable_pwa: false,
        }
    }
}

// ============================================================================
// partial input
// ============================================================================

/// User-authored configuration: every section and field optional.
/// Unknown fields are collected (not rejected) by the loading entry points.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialPortfolioConfig {
    pub github: Option<PartialGithubConfig>,
    pub base: Option<String>,
    pub projects: Option<PartialProjectsConfig>,
    pub seo: Option<PartialSeoConfig>,
    pub social: Option<PartialSocialConfig>,
    pub resume: Option<PartialResumeConfig>,
    pub skills: Option<Vec<String>>,
    pub experiences: Option<Vec<Experience>>,
    pub certifications: Option<Vec<Certification>>,
    pub educations: Option<Vec<Education>>,
    pub publications: Option<Vec<Publication>>,
    pub blog: Option<PartialBlogConfig>,
    pub google_analytics: Option<PartialGoogleAnalyticsConfig>,
    pub hotjar: Option<PartialHotjarConfig>,
    pub theme_config: Option<PartialThemeConfig>,
    pub footer: Option<String>,
    #[serde(rename = "enablePWA")]
    pub enable_pwa: Option<bool>,
}

// ============================================================================
// loading & resolution
// ============================================================================

impl PortfolioConfig {
    /// Load, parse, and resolve configuration from a file path.
    ///
    /// Unknown fields are reported as a grouped warning, never errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str_at(&content, Some(path))
    }

    /// Parse and resolve configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        Self::from_str_at(content, None)
    }

    fn from_str_at(content: &str, path: Option<&Path>) -> Result<Self> {
        let (partial, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(Self::resolve(partial)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(PartialPortfolioConfig, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let partial = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((partial, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: Option<&Path>) {
        let display_path = path
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config".into());
        log!("warning"; "unknown fields in {display_path}, ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Resolve a partial configuration against the documented defaults.
    ///
    /// Total over missing fields; fails with collected diagnostics when a
    /// present field violates an enum or URL constraint. On failure the
    /// resolved value is never returned partially applied. Shape warnings
    /// (authored-but-ignored branches, etc.) are printed, not raised.
    pub fn resolve(partial: PartialPortfolioConfig) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let resolved = Self::resolve_with(partial, &mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(resolved)
    }

    /// Field-by-field resolution, collecting diagnostics.
    pub(crate) fn resolve_with(
        partial: PartialPortfolioConfig,
        diag: &mut ConfigDiagnostics,
    ) -> Self {
        let defaults = Self::default();
        Self {
            github: GithubConfig::resolve(partial.github.unwrap_or_default(), diag),
            base: partial.base.unwrap_or(defaults.base),
            projects: ProjectsConfig::resolve(partial.projects.unwrap_or_default(), diag),
            seo: SeoConfig::resolve(partial.seo.unwrap_or_default(), diag),
            social: SocialConfig::resolve(partial.social.unwrap_or_default(), diag),
            resume: ResumeConfig::resolve(partial.resume.unwrap_or_default(), diag),
            skills: partial.skills.unwrap_or_default(),
            experiences: partial.experiences.unwrap_or_default(),
            certifications: partial.certifications.unwrap_or_default(),
            educations: partial.educations.unwrap_or_default(),
            publications: partial.publications.unwrap_or_default(),
            blog: BlogConfig::resolve(partial.blog.unwrap_or_default(), diag),
            google_analytics: GoogleAnalyticsConfig::resolve(
                partial.google_analytics.unwrap_or_default(),
            ),
            hotjar: HotjarConfig::resolve(partial.hotjar.unwrap_or_default()),
            theme_config: ThemeConfig::resolve(partial.theme_config.unwrap_or_default(), diag),
            footer: partial.footer.unwrap_or(defaults.footer),
            enable_pwa: partial.enable_pwa.unwrap_or(defaults.enable_pwa),
        }
    }

    /// Lower a resolved configuration back to partial form.
    ///
    /// `resolve(x.into_partial())` returns `x` unchanged: once defaults are
    /// applied as the new baseline, resolution is idempotent.
    pub fn into_partial(self) -> PartialPortfolioConfig {
        PartialPortfolioConfig {
            github: Some(self.github.into()),
            base: Some(self.base),
            projects: Some(self.projects.into()),
            seo: Some(self.seo.into()),
            social: Some(self.social.into()),
            resume: Some(self.resume.into()),
            skills: Some(self.skills),
            experiences: Some(self.experiences),
            certifications: Some(self.certifications),
            educations: Some(self.educations),
            publications: Some(self.publications),
            blog: Some(self.blog.into()),
            google_analytics: Some(self.google_analytics.into()),
            hotjar: Some(self.hotjar.into()),
            theme_config: Some(self.theme_config.into()),
            footer: Some(self.footer),
            enable_pwa: Some(self.enable_pwa),
        }
    }

    /// Export the resolved configuration for the rendering layer.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse and resolve config from a TOML snippet with `[github]` pre-filled.
/// Panics if there are unknown fields (to catch config typos in tests).
/// The `[github]` table goes last so snippets may start with root-level keys.
#[cfg(test)]
pub fn test_resolve_config(extra: &str) -> PortfolioConfig {
    let content = format!("{extra}\n[github]\nusername = \"octocat\"\n");
    let (partial, ignored) = PortfolioConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    PortfolioConfig::resolve(partial).unwrap()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = PortfolioConfig::from_str("[github\nusername = \"octocat\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_resolves_to_defaults() {
        let resolved = PortfolioConfig::resolve(PartialPortfolioConfig::default()).unwrap();
        assert_eq!(resolved, *DEFAULTS);
        assert_eq!(resolved.base, "/");
        assert_eq!(resolved.projects.github.automatic.limit, 8);
        assert_eq!(resolved.theme_config.default_theme, "lofi");
        assert!(!resolved.enable_pwa);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = test_resolve_config(
            r#"base = "/portfolio/"
enablePWA = true
skills = ["Rust", "Serde"]

[projects.github]
mode = "manual"

[projects.github.manual]
projects = ["octocat/hello-world"]

[blog]
source = "dev"
username = "octocat"
limit = 3
"#,
        );
        let second = PortfolioConfig::resolve(first.clone().into_partial()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_user_facing_field_names_parse() {
        let resolved = test_resolve_config(
            r#"[projects.github.automatic]
sortBy = "updated"

[seo]
imageURL = "https://example.com/preview.png"

[resume]
fileUrl = "https://example.com/resume.pdf"

[themeConfig]
defaultTheme = "dark"
respectPrefersColorScheme = true

[[experiences]]
company = "Company Name"
companyLink = "https://example.com"

[hotjar]
snippetVersion = 7
"#,
        );
        assert_eq!(resolved.projects.github.automatic.sort_by, SortBy::Updated);
        assert_eq!(resolved.seo.image_url, "https://example.com/preview.png");
        assert!(resolved.resume.display());
        assert_eq!(resolved.theme_config.default_theme, "dark");
        assert!(resolved.theme_config.respect_prefers_color_scheme);
        assert_eq!(resolved.experiences[0].company_link, "https://example.com");
        assert_eq!(resolved.hotjar.snippet_version, 7);
    }

    #[test]
    fn test_unknown_fields_detected_but_not_fatal() {
        let content = "[github]\nusername = \"octocat\"\n[unknown_section]\nfield = \"value\"";
        let (partial, ignored) = PortfolioConfig::parse_with_ignored(content).unwrap();

        assert_eq!(partial.github.unwrap().username.as_deref(), Some("octocat"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[github]\nusername = \"octocat\"";
        let (_, ignored) = PortfolioConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_invalid_enum_aborts_resolution() {
        let content = "[projects.github]\nmode = \"popularity\"";
        let (partial, _) = PortfolioConfig::parse_with_ignored(content).unwrap();
        let err = PortfolioConfig::resolve(partial).unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => {
                assert_eq!(diag.len(), 1);
                assert_eq!(diag.errors()[0].field.as_str(), "projects.github.mode");
            }
            other => panic!("expected diagnostics error, got {other}"),
        }
    }

    #[test]
    fn test_all_errors_collected_in_one_pass() {
        let content = r#"[projects.github]
mode = "popularity"

[projects.github.automatic]
sortBy = "forks"

[blog]
source = "rss"
"#;
        let (partial, _) = PortfolioConfig::parse_with_ignored(content).unwrap();
        match PortfolioConfig::resolve(partial).unwrap_err() {
            ConfigError::Diagnostics(diag) => assert_eq!(diag.len(), 3),
            other => panic!("expected diagnostics error, got {other}"),
        }
    }

    #[test]
    fn test_json_export_uses_user_facing_names() {
        let resolved = PortfolioConfig::resolve(PartialPortfolioConfig::default()).unwrap();
        let json = resolved.to_json().unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("googleAnalytics"));
        assert!(object.contains_key("themeConfig"));
        assert!(object.contains_key("enablePWA"));
        assert_eq!(
            json["projects"]["github"]["automatic"]["sortBy"],
            serde_json::json!("stars")
        );
        assert_eq!(json["themeConfig"]["customTheme"]["base-100"], "#E3E3ED");
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gitfolio.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[github]\nusername = \"octocat\"").unwrap();

        let resolved = PortfolioConfig::load(&path).unwrap();
        assert_eq!(resolved.github.username, "octocat");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = PortfolioConfig::load(Path::new("/nonexistent/gitfolio.toml")).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}

