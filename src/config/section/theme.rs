//! `[themeConfig]` section configuration.
//!
//! Theme selection and the custom palette. The actual CSS variable injection
//! happens in the rendering layer; this section only resolves which themes
//! are offered and which one starts active.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! defaultTheme = "procyon"
//! disableSwitch = false
//! themes = ["light", "dark", "procyon"]
//!
//! [themeConfig.customTheme]
//! primary = "#fc055b"
//! secondary = "#219aaf"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme names offered when the user does not author a list.
pub const DEFAULT_THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
    "procyon",
];

/// Palette applied when a custom theme is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: String,
    #[serde(rename = "base-100")]
    pub base_100: String,
    #[serde(rename = "--rounded-box")]
    pub rounded_box: String,
    #[serde(rename = "--rounded-btn")]
    pub rounded_btn: String,
}

impl Default for CustomThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#fc055b".into(),
            secondary: "#219aaf".into(),
            accent: "#e8d03a".into(),
            neutral: "#2A2730".into(),
            base_100: "#E3E3ED".into(),
            rounded_box: "3rem".into(),
            rounded_btn: "3rem".into(),
        }
    }
}

/// The `[themeConfig]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "themeConfig")]
pub struct ThemeConfig {
    /// Theme active on first visit.
    pub default_theme: String,
    /// Hide the theme switcher in the navbar.
    pub disable_switch: bool,
    /// Follow the system color-scheme preference.
    pub respect_prefers_color_scheme: bool,
    /// Display a ring around the profile picture.
    pub display_avatar_ring: bool,
    /// Themes offered in the switcher.
    pub themes: Vec<String>,
    /// Custom palette.
    pub custom_theme: CustomThemeConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: "lofi".into(),
            disable_switch: false,
            respect_prefers_color_scheme: false,
            display_avatar_ring: true,
            themes: DEFAULT_THEMES.iter().map(ToString::to_string).collect(),
            custom_theme: CustomThemeConfig::default(),
        }
    }
}

/// User-authored `[themeConfig]` input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialThemeConfig {
    pub default_theme: Option<String>,
    pub disable_switch: Option<bool>,
    pub respect_prefers_color_scheme: Option<bool>,
    pub display_avatar_ring: Option<bool>,
    pub themes: Option<Vec<String>>,
    pub custom_theme: Option<CustomThemeConfig>,
}

impl ThemeConfig {
    /// Apply user values over defaults.
    ///
    /// A `defaultTheme` missing from `themes` is a shape warning: the
    /// renderer falls back to its own default rather than failing, but the
    /// switcher will never show the configured start theme.
    pub fn resolve(partial: PartialThemeConfig, diag: &mut ConfigDiagnostics) -> Self {
        let defaults = Self::default();
        let resolved = Self {
            default_theme: partial.default_theme.unwrap_or(defaults.default_theme),
            disable_switch: partial.disable_switch.unwrap_or(defaults.disable_switch),
            respect_prefers_color_scheme: partial
                .respect_prefers_color_scheme
                .unwrap_or(defaults.respect_prefers_color_scheme),
            display_avatar_ring: partial
                .display_avatar_ring
                .unwrap_or(defaults.display_avatar_ring),
            themes: partial.themes.unwrap_or(defaults.themes),
            custom_theme: partial.custom_theme.unwrap_or(defaults.custom_theme),
        };
        if !resolved.themes.iter().any(|t| t == &resolved.default_theme) {
            diag.warn(
                Self::FIELDS.default_theme,
                format!(
                    "\"{}\" is not in themeConfig.themes; the switcher will never show it",
                    resolved.default_theme
                ),
            );
        }
        resolved
    }
}

impl From<ThemeConfig> for PartialThemeConfig {
    fn from(resolved: ThemeConfig) -> Self {
        Self {
            default_theme: Some(resolved.default_theme),
            disable_switch: Some(resolved.disable_switch),
            respect_prefers_color_scheme: Some(resolved.respect_prefers_color_scheme),
            display_avatar_ring: Some(resolved.display_avatar_ring),
            themes: Some(resolved.themes),
            custom_theme: Some(resolved.custom_theme),
        }
    }
}
