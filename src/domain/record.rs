use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description available for this book.";
pub const UNKNOWN_YEAR: &str = "N/A";

/// Number of subjects shown for a record.
pub const DISPLAY_SUBJECT_LIMIT: usize = 10;

/// Identifier used to build a cover image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverRef {
    /// Numeric cover id (`cover_i`, `covers[0]`)
    Id(i64),
    /// Edition OLID (`cover_edition_key`)
    Olid(String),
}

impl fmt::Display for CoverRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverRef::Id(id) => write!(f, "{}", id),
            CoverRef::Olid(olid) => f.write_str(olid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishYear {
    Year(i64),
    Text(String),
    Unknown,
}

impl fmt::Display for PublishYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishYear::Year(year) => write!(f, "{}", year),
            PublishYear::Text(text) => f.write_str(text),
            PublishYear::Unknown => f.write_str(UNKNOWN_YEAR),
        }
    }
}

/// Normalized, render-ready book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Stable identity: the catalog key, or a hash of title and author
    pub id: String,
    /// Catalog key used for detail lookups (`/works/OL...W`)
    pub key: Option<String>,
    pub title: String,
    /// First listed author, or the unknown-author sentinel
    pub author: String,
    pub authors: Vec<String>,
    pub cover: Option<CoverRef>,
    pub publish_year: PublishYear,
    /// Always within `[2.0, 5.0)`
    pub rating: f64,
    /// Full subject list; see [`DisplayRecord::display_subjects`]
    pub subjects: Vec<String>,
    pub languages: Vec<String>,
    pub page_count: Option<u32>,
    pub description: Option<String>,
    /// Subject the record was discovered under, when a section tags its items
    pub subject_tag: Option<String>,
}

impl DisplayRecord {
    /// Identity for records without a catalog key.
    pub fn generate_id(title: &str, author: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(title.as_bytes());
        hasher.update([0u8]);
        hasher.update(author.as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn display_subjects(&self) -> &[String] {
        let end = self.subjects.len().min(DISPLAY_SUBJECT_LIMIT);
        &self.subjects[..end]
    }

    /// All authors joined for the detail view.
    pub fn author_list(&self) -> String {
        if self.authors.is_empty() {
            self.author.clone()
        } else {
            self.authors.join(", ")
        }
    }

    pub fn has_key(&self) -> bool {
        self.key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DisplayRecord {
        DisplayRecord {
            id: "/works/OL1W".into(),
            key: Some("/works/OL1W".into()),
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            authors: vec!["Frank Herbert".into()],
            cover: None,
            publish_year: PublishYear::Unknown,
            rating: 3.0,
            subjects: (0..15).map(|i| format!("s{}", i)).collect(),
            languages: Vec::new(),
            page_count: None,
            description: None,
            subject_tag: None,
        }
    }

    #[test]
    fn test_id_generation_deterministic() {
        let id1 = DisplayRecord::generate_id("Dune", "Frank Herbert");
        let id2 = DisplayRecord::generate_id("Dune", "Frank Herbert");
        assert_eq!(id1, id2);
        assert_eq!(id1.len(), 64);
        assert_ne!(id1, DisplayRecord::generate_id("Dun", "eFrank Herbert"));
    }

    #[test]
    fn test_display_subjects_capped() {
        let record = record();
        assert_eq!(record.display_subjects().len(), DISPLAY_SUBJECT_LIMIT);
        assert_eq!(record.subjects.len(), 15);
    }

    #[test]
    fn test_sentinels_render() {
        let record = record();
        assert_eq!(record.description(), NO_DESCRIPTION);
        assert_eq!(record.publish_year.to_string(), "N/A");
        assert_eq!(CoverRef::Olid("OL7353617M".into()).to_string(), "OL7353617M");
    }

    #[test]
    fn test_has_key() {
        let mut record = record();
        assert!(record.has_key());
        record.key = Some("  ".into());
        assert!(!record.has_key());
        record.key = None;
        assert!(!record.has_key());
    }
}
