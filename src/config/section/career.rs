//! Career history record types.
//!
//! Entries for the root-level `experiences`, `educations`, `certifications`,
//! and `publications` sequences. Sequences fully replace the (empty) default;
//! missing leaf fields inside an entry default to empty strings.
//!
//! # Example
//!
//! ```toml
//! [[experiences]]
//! company = "Company Name"
//! position = "Position"
//! from = "September 2021"
//! to = "Present"
//! companyLink = "https://example.com"
//!
//! [[educations]]
//! institution = "Institution Name"
//! degree = "Degree"
//! from = "2015"
//! to = "2019"
//! ```

use serde::{Deserialize, Serialize};

/// A work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// Company name.
    pub company: String,
    /// Position held.
    pub position: String,
    /// Start date, e.g. "September 2021".
    pub from: String,
    /// End date. "Present" for current positions.
    pub to: String,
    /// URL to the company website.
    pub company_link: String,
}

/// An educational qualification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    /// Name of the institution.
    pub institution: String,
    /// Degree obtained.
    pub degree: String,
    /// Start year.
    pub from: String,
    /// End year.
    pub to: String,
}

/// A certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    /// Name of the certification.
    pub name: String,
    /// Issuing body.
    pub body: String,
    /// Year of certification, e.g. "March 2022".
    pub year: String,
    /// URL to the certification.
    pub link: String,
}

/// A publication entry.
///
/// `journal_name` and `conference_name` stay optional after resolution:
/// a publication appears in exactly one venue kind, and the renderer shows
/// whichever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    /// Title of the publication.
    pub title: String,
    /// Journal it appeared in, if any.
    pub journal_name: Option<String>,
    /// Conference it appeared at, if any.
    pub conference_name: Option<String>,
    /// Authors, e.g. "John Doe, Jane Smith".
    pub authors: String,
    /// URL to the publication.
    pub link: String,
    /// Brief description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_entry_fields_default_to_empty() {
        let entry: Experience = toml::from_str("company = \"Acme\"").unwrap();
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.position, "");
        assert_eq!(entry.company_link, "");
    }

    #[test]
    fn test_publication_venue_kinds_stay_optional() {
        let journal: Publication =
            toml::from_str("title = \"T\"\njournalName = \"Journal Name\"").unwrap();
        assert_eq!(journal.journal_name.as_deref(), Some("Journal Name"));
        assert!(journal.conference_name.is_none());
    }
}
