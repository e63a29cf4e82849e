//! Proc macros for gitfolio.
//!
//! # Config derive macro
//!
//! Generates type-safe field path accessors for diagnostics.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "projects.github")]
//! pub struct GithubProjectsConfig {
//!     pub display: bool,
//!
//!     /// Selection mode.
//!     pub mode: Mode,
//!
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - GithubProjectsConfig::FIELDS.display -> FieldPath("projects.github.display")
//! // - GithubProjectsConfig::FIELDS.mode    -> FieldPath("projects.github.mode")
//! ```
//!
//! Field idents are converted to the user-facing camelCase spelling
//! (`sort_by` → `sortBy`); irregular names are overridden with
//! `#[config(name = "imageURL")]`.
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - config section path ("" for root fields)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (internal use)
//! - `#[config(name = "x")]` - Custom user-facing field name

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS path accessors.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
