//! Configuration utility functions.

use crate::config::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Find a config file by searching upward from the current directory.
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/portfolio/content/   ← cwd
/// /home/user/portfolio/gitfolio.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Check a URL-valued field, returning a description of what is wrong.
///
/// Empty values are fine (the field's feature is simply disabled);
/// non-empty values must parse as http(s) URLs with a host.
pub(crate) fn http_url_error(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                return Some(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ));
            }
            if parsed.host_str().is_none() {
                return Some("URL must have a valid host".into());
            }
            None
        }
        Err(e) => Some(format!("invalid URL: {e}")),
    }
}

/// Validate a URL-valued field, collecting an error into `diag` on failure.
pub(crate) fn check_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if let Some(problem) = http_url_error(value) {
        diag.error_with_hint(field, problem, "use format like https://example.com");
    }
}

/// Resolve an enumerated string field against its closed value set.
///
/// Absent fields take the default; present fields outside the legal set are
/// a validation error, never silently defaulted.
pub(crate) fn resolve_enum<T: Default>(
    raw: Option<String>,
    field: FieldPath,
    legal: &[&str],
    parse: impl Fn(&str) -> Option<T>,
    diag: &mut ConfigDiagnostics,
) -> T {
    match raw {
        None => T::default(),
        Some(s) => parse(&s).unwrap_or_else(|| {
            diag.error_with_hint(
                field,
                format!("unknown value `{s}`"),
                format!("expected one of: {}", legal.join(" | ")),
            );
            T::default()
        }),
    }
}

// ============================================================================
// tests
// ============================================================================
