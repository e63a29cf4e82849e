//! Project selection policy.
//!
//! Turns the resolved `[projects]` section plus a list of repository
//! candidates into the final ordered sequence to render:
//!
//! - **automatic** mode filters candidates (forks, exclude list), sorts them
//!   by the configured key, and truncates to the configured limit;
//! - **manual** mode emits the authored list verbatim, deduplicated;
//! - external projects are appended after the github-sourced entries, in
//!   authored order, never interleaved or re-sorted together.
//!
//! Selection is a pure function of its inputs and raises no errors: every
//! input has already passed resolution, and numeric clamps replace what
//! would otherwise be out-of-range failures.

mod candidate;

pub use candidate::ProjectCandidate;

use rustc_hash::FxHashSet;
use serde::Serialize;
use std::cmp::Ordering;

use crate::config::{
    AutomaticConfig, ExternalProject, GithubProjectsConfig, ManualConfig, Mode, ProjectsConfig,
    SortBy,
};

/// One entry of the final project list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectEntry {
    /// A github repository, by identifier; the renderer looks up its
    /// display metadata per identifier.
    Github(String),
    /// A hand-authored card, passed through unchanged.
    External(ExternalProject),
}

/// Compute the final ordered project list.
///
/// Github-sourced entries first (at most `automatic.limit` of them in
/// automatic mode), then the external projects in authored order.
pub fn select_projects(
    projects: &ProjectsConfig,
    candidates: &[ProjectCandidate],
) -> Vec<ProjectEntry> {
    github_selection(&projects.github, candidates)
        .into_iter()
        .map(ProjectEntry::Github)
        .chain(
            projects
                .external
                .projects
                .iter()
                .cloned()
                .map(ProjectEntry::External),
        )
        .collect()
}

/// Compute the github-sourced portion of the project list.
pub fn github_selection(
    github: &GithubProjectsConfig,
    candidates: &[ProjectCandidate],
) -> Vec<String> {
    if !github.display {
        return Vec::new();
    }
    match github.mode {
        Mode::Automatic => automatic_selection(&github.automatic, candidates),
        Mode::Manual => manual_selection(&github.manual),
    }
}

/// Filter, sort, and truncate candidates per the automatic settings.
fn automatic_selection(
    automatic: &AutomaticConfig,
    candidates: &[ProjectCandidate],
) -> Vec<String> {
    let excluded: FxHashSet<&str> = automatic
        .exclude
        .projects
        .iter()
        .map(String::as_str)
        .collect();

    let mut picked: Vec<&ProjectCandidate> = candidates
        .iter()
        .filter(|c| !(automatic.exclude.forks && c.fork))
        .filter(|c| !excluded.contains(c.name.as_str()))
        .collect();

    picked.sort_by(|a, b| compare_candidates(a, b, automatic.sort_by));
    picked.truncate(automatic.limit);
    picked.into_iter().map(|c| c.name.clone()).collect()
}

/// Descending by the sort key, ties broken by name ascending so equal-keyed
/// candidates always come out in the same order.
fn compare_candidates(a: &ProjectCandidate, b: &ProjectCandidate, sort_by: SortBy) -> Ordering {
    let by_key = match sort_by {
        SortBy::Stars => b.stars.cmp(&a.stars),
        SortBy::Updated => b.updated_at.cmp(&a.updated_at),
    };
    by_key.then_with(|| a.name.cmp(&b.name))
}

/// The authored list verbatim, deduplicated (first occurrence wins).
fn manual_selection(manual: &ManualConfig) -> Vec<String> {
    let mut seen = FxHashSet::default();
    manual
        .projects
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExcludeConfig, ExternalProjectsConfig};

    fn candidates() -> Vec<ProjectCandidate> {
        vec![
            ProjectCandidate::new("octocat/alpha", 5, 300, false),
            ProjectCandidate::new("octocat/bravo", 9, 100, false),
            ProjectCandidate::new("octocat/charlie", 9, 200, true),
            ProjectCandidate::new("octocat/delta", 2, 400, false),
        ]
    }

    fn automatic_github(automatic: AutomaticConfig) -> GithubProjectsConfig {
        GithubProjectsConfig {
            automatic,
            ..Default::default()
        }
    }

    #[test]
    fn test_stars_sort_with_name_tie_break() {
        let github = automatic_github(AutomaticConfig::default());
        let selected = github_selection(&github, &candidates());
        // bravo and charlie both have 9 stars; bravo sorts first by name.
        assert_eq!(
            selected,
            vec![
                "octocat/bravo",
                "octocat/charlie",
                "octocat/alpha",
                "octocat/delta"
            ]
        );
    }

    #[test]
    fn test_updated_sort_descending() {
        let github = automatic_github(AutomaticConfig {
            sort_by: SortBy::Updated,
            ..Default::default()
        });
        let selected = github_selection(&github, &candidates());
        assert_eq!(
            selected,
            vec![
                "octocat/delta",
                "octocat/alpha",
                "octocat/charlie",
                "octocat/bravo"
            ]
        );
    }

    #[test]
    fn test_exclude_forks() {
        let github = automatic_github(AutomaticConfig {
            exclude: ExcludeConfig {
                forks: true,
                projects: Vec::new(),
            },
            ..Default::default()
        });
        let selected = github_selection(&github, &candidates());
        assert!(!selected.contains(&"octocat/charlie".to_string()));
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_exclude_list_is_exact_match() {
        let github = automatic_github(AutomaticConfig {
            exclude: ExcludeConfig {
                forks: false,
                projects: vec!["octocat/bravo".into(), "octocat/Alpha".into()],
            },
            ..Default::default()
        });
        let selected = github_selection(&github, &candidates());
        assert!(!selected.contains(&"octocat/bravo".to_string()));
        // Exclusion is case-sensitive exact match; "octocat/Alpha" ≠ "octocat/alpha".
        assert!(selected.contains(&"octocat/alpha".to_string()));
    }

    #[test]
    fn test_limit_truncates() {
        let github = automatic_github(AutomaticConfig {
            limit: 2,
            ..Default::default()
        });
        let selected = github_selection(&github, &candidates());
        assert_eq!(selected, vec!["octocat/bravo", "octocat/charlie"]);
    }

    #[test]
    fn test_limit_zero_yields_empty_selection() {
        let github = automatic_github(AutomaticConfig {
            limit: 0,
            ..Default::default()
        });
        assert!(github_selection(&github, &candidates()).is_empty());
    }

    #[test]
    fn test_manual_mode_ignores_candidates() {
        let github = GithubProjectsConfig {
            mode: Mode::Manual,
            manual: ManualConfig {
                projects: vec![
                    "octocat/zulu".into(),
                    "octocat/yankee".into(),
                    "octocat/zulu".into(),
                ],
            },
            ..Default::default()
        };
        let selected = github_selection(&github, &candidates());
        // Authored order, first occurrence wins; candidate data plays no part.
        assert_eq!(selected, vec!["octocat/zulu", "octocat/yankee"]);
    }

    #[test]
    fn test_display_false_empties_github_portion_only() {
        let projects = ProjectsConfig {
            github: GithubProjectsConfig {
                display: false,
                ..Default::default()
            },
            external: ExternalProjectsConfig {
                header: "My Projects".into(),
                projects: vec![ExternalProject {
                    title: "Side Project".into(),
                    ..Default::default()
                }],
            },
        };
        let entries = select_projects(&projects, &candidates());
        assert_eq!(entries.len(), 1);
        assert!(matches!(&entries[0], ProjectEntry::External(p) if p.title == "Side Project"));
    }

    #[test]
    fn test_external_projects_appended_after_github() {
        let projects = ProjectsConfig {
            github: automatic_github(AutomaticConfig {
                limit: 1,
                ..Default::default()
            }),
            external: ExternalProjectsConfig {
                header: "My Projects".into(),
                projects: vec![
                    ExternalProject {
                        title: "First".into(),
                        ..Default::default()
                    },
                    ExternalProject {
                        title: "Second".into(),
                        ..Default::default()
                    },
                ],
            },
        };
        let entries = select_projects(&projects, &candidates());
        assert_eq!(entries.len(), 3);
        assert!(matches!(&entries[0], ProjectEntry::Github(name) if name == "octocat/bravo"));
        assert!(matches!(&entries[1], ProjectEntry::External(p) if p.title == "First"));
        assert!(matches!(&entries[2], ProjectEntry::External(p) if p.title == "Second"));
    }

    #[test]
    fn test_selection_length_bounded_by_limit() {
        for limit in 0..6 {
            let github = automatic_github(AutomaticConfig {
                limit,
                ..Default::default()
            });
            assert!(github_selection(&github, &candidates()).len() <= limit);
        }
    }
}
