//! Configuration resolver and project selector for a git-driven
//! portfolio site generator.
//!
//! The crate owns two things:
//!
//! 1. **Configuration resolution** — `gitfolio.toml` (or a programmatically
//!    built [`PartialPortfolioConfig`]) is merged over the documented
//!    defaults, enum fields are checked against their closed value sets, and
//!    the result is a [`PortfolioConfig`] with no remaining optional leaves.
//! 2. **Project selection** — the resolved `projects` section plus a list of
//!    repository candidates (fetched by the caller) is turned into the final
//!    ordered, length-bounded list of projects to render.
//!
//! Rendering, metadata fetching, PWA wiring, and analytics injection are the
//! caller's concern; this crate only consumes candidates and emits the
//! resolved configuration and project list.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # One module per configuration section
//! ├── types/     # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util       # Config file search, URL/enum field checks
//! └── mod.rs     # PortfolioConfig + PartialPortfolioConfig
//! projects/      # Candidate records and the selection policy
//! logger         # log! / debug! macros
//! ```

pub mod config;
pub mod logger;
pub mod projects;

pub use config::{
    ConfigDiagnostics, ConfigError, PartialPortfolioConfig, PortfolioConfig, find_config_file,
};
pub use projects::{ProjectCandidate, ProjectEntry, select_projects};
