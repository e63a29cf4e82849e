//! Configuration section definitions.
//!
//! Each module corresponds to a section of `gitfolio.toml`:
//!
//! | Module      | TOML Section                   | Purpose                         |
//! |-------------|--------------------------------|---------------------------------|
//! | `github`    | `[github]`                     | Account identity                |
//! | `projects`  | `[projects]`                   | Github + external project lists |
//! | `seo`       | `[seo]`                        | Page head metadata              |
//! | `social`    | `[social]`                     | Social profile links            |
//! | `resume`    | `[resume]`                     | Resume download button          |
//! | `career`    | `[[experiences]]` etc.         | Career history records          |
//! | `blog`      | `[blog]`                       | Recent-articles section         |
//! | `analytics` | `[googleAnalytics]`, `[hotjar]`| Analytics identifiers           |
//! | `theme`     | `[themeConfig]`                | Theme selection and palette     |

mod analytics;
mod blog;
mod career;
mod github;
pub mod projects;
mod resume;
mod seo;
mod social;
mod theme;

pub use analytics::{
    GoogleAnalyticsConfig, HotjarConfig, PartialGoogleAnalyticsConfig, PartialHotjarConfig,
};
pub use blog::{BlogConfig, BlogSource, MAX_BLOG_LIMIT, PartialBlogConfig};
pub use career::{Certification, Education, Experience, Publication};
pub use github::{GithubConfig, PartialGithubConfig};
pub use projects::{
    AutomaticConfig, ExcludeConfig, ExternalProject, ExternalProjectsConfig,
    GithubProjectsConfig, ManualConfig, Mode, PartialProjectsConfig, ProjectsConfig, SortBy,
};
pub use resume::{PartialResumeConfig, ResumeConfig};
pub use seo::{PartialSeoConfig, SeoConfig};
pub use social::{PartialSocialConfig, SocialConfig};
pub use theme::{CustomThemeConfig, DEFAULT_THEMES, PartialThemeConfig, ThemeConfig};
