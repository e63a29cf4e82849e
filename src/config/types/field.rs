//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors spelled the way users write them in
/// `gitfolio.toml` (camelCase).
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "projects.github")]
/// pub struct GithubProjectsConfig {
///     pub mode: Mode,
/// }
///
/// // Generated:
/// impl GithubProjectsConfig {
///     pub const FIELDS: GithubProjectsConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(GithubProjectsConfig::FIELDS.mode, "unknown value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
