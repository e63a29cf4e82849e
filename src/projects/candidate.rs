//! Repository candidate records.
//!
//! Candidates are fetched by an external collaborator (a GitHub metadata
//! fetcher, a cache, a fixture file); this crate only consumes them.

use serde::{Deserialize, Serialize};

/// A repository considered for automatic selection.
///
/// Immutable once obtained. `Deserialize` accepts the GitHub REST field
/// spellings (`full_name`, `stargazers_count`) so a thin fetcher can feed
/// API responses straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCandidate {
    /// Repository identifier, "owner/repo".
    #[serde(alias = "full_name")]
    pub name: String,

    /// Star count.
    #[serde(alias = "stargazers_count")]
    pub stars: u32,

    /// Last-updated timestamp as a comparable ordinal (epoch seconds).
    pub updated_at: i64,

    /// Whether the repository is a fork.
    pub fork: bool,
}

impl ProjectCandidate {
    pub fn new(name: impl Into<String>, stars: u32, updated_at: i64, fork: bool) -> Self {
        Self {
            name: name.into(),
            stars,
            updated_at,
            fork,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_github_rest_field_names() {
        let candidate: ProjectCandidate = serde_json::from_str(
            r#"{"full_name": "octocat/hello-world", "stargazers_count": 42, "fork": false}"#,
        )
        .unwrap();
        assert_eq!(candidate.name, "octocat/hello-world");
        assert_eq!(candidate.stars, 42);
        assert!(!candidate.fork);
    }

    #[test]
    fn test_accepts_own_field_names() {
        let candidate: ProjectCandidate =
            serde_json::from_str(r#"{"name": "octocat/spoon-knife", "stars": 7, "fork": true}"#)
                .unwrap();
        assert_eq!(candidate.name, "octocat/spoon-knife");
        assert!(candidate.fork);
    }
}
