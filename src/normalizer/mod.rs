//! Raw catalog record -> [`DisplayRecord`].
//!
//! Normalization never fails; every field resolves to a value or a sentinel.

use html_escape::decode_html_entities;
use sha2::{Digest, Sha256};

use crate::domain::record::{UNKNOWN_AUTHOR, UNTITLED};
use crate::domain::{CoverRef, DisplayRecord, OneOrMany, PublishYear, RawRecord, YearValue};

pub const RATING_FLOOR: f64 = 2.0;
pub const RATING_CEILING: f64 = 5.0;
const RATING_SPAN: f64 = RATING_CEILING - RATING_FLOOR;
// Largest value strictly below the ceiling.
const RATING_MAX: f64 = RATING_CEILING - 4.0 * f64::EPSILON;

/// Section-specific values applied on top of the raw record.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOverrides {
    /// Tag the record with the subject it was loaded under
    pub subject: Option<String>,
    /// Explicit rating; clamped into the display range
    pub rating: Option<f64>,
}

impl NormalizeOverrides {
    pub fn tagged(subject: &str) -> Self {
        Self {
            subject: Some(subject.to_string()),
            rating: None,
        }
    }
}

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, raw: &RawRecord, overrides: &NormalizeOverrides) -> DisplayRecord {
        let title = raw
            .title
            .as_deref()
            .map(|t| decode_html_entities(t.trim()).to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        let authors = strings(raw.author_name.as_ref());
        let author = authors
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let key = raw
            .key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from);
        let id = key
            .clone()
            .unwrap_or_else(|| DisplayRecord::generate_id(&title, &author));

        let subjects = {
            let summary = strings(raw.subject.as_ref());
            if summary.is_empty() {
                strings(raw.subjects.as_ref())
            } else {
                summary
            }
        };

        let rating = overrides
            .rating
            .or(raw.ratings_average)
            .filter(|r| r.is_finite())
            .map(clamp_rating)
            .unwrap_or_else(|| synthesize_rating(&id));

        DisplayRecord {
            id,
            key,
            title,
            author,
            authors,
            cover: resolve_cover(raw),
            publish_year: resolve_year(raw),
            rating,
            subjects,
            languages: languages(raw),
            page_count: raw.number_of_pages_median.or(raw.number_of_pages),
            description: description(raw),
            subject_tag: overrides.subject.clone(),
        }
    }

    /// Merge an extended detail record into a summary.
    ///
    /// Description prefers the detail record. Subjects, languages and page
    /// count keep the summary's values and only fill gaps. Title, author,
    /// year, rating and identity always stay the summary's.
    pub fn merge_detail(&self, summary: &DisplayRecord, detail: &RawRecord) -> DisplayRecord {
        let mut merged = summary.clone();

        if let Some(text) = description(detail) {
            merged.description = Some(text);
        }
        if merged.subjects.is_empty() {
            let mut subjects = strings(detail.subjects.as_ref());
            if subjects.is_empty() {
                subjects = strings(detail.subject.as_ref());
            }
            merged.subjects = subjects;
        }
        if merged.languages.is_empty() {
            merged.languages = languages(detail);
        }
        if merged.page_count.is_none() {
            merged.page_count = detail.number_of_pages.or(detail.number_of_pages_median);
        }
        if merged.cover.is_none() {
            merged.cover = resolve_cover(detail);
        }

        merged
    }
}

fn strings(field: Option<&OneOrMany<String>>) -> Vec<String> {
    field
        .map(OneOrMany::to_vec)
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn resolve_cover(raw: &RawRecord) -> Option<CoverRef> {
    if let Some(id) = raw.cover_i.filter(|id| *id > 0) {
        return Some(CoverRef::Id(id));
    }
    if let Some(olid) = raw
        .cover_edition_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
    {
        return Some(CoverRef::Olid(olid.to_string()));
    }
    raw.covers
        .as_ref()
        .and_then(|covers| covers.iter().copied().find(|id| *id > 0))
        .map(CoverRef::Id)
}

fn resolve_year(raw: &RawRecord) -> PublishYear {
    raw.first_publish_year
        .as_ref()
        .or_else(|| raw.publish_year.as_ref().and_then(OneOrMany::first))
        .and_then(|year| match year {
            YearValue::Number(n) => Some(PublishYear::Year(*n)),
            YearValue::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| PublishYear::Text(text.to_string()))
            }
        })
        .unwrap_or(PublishYear::Unknown)
}

fn description(raw: &RawRecord) -> Option<String> {
    raw.description
        .as_ref()
        .map(|d| decode_html_entities(d.as_str().trim()).to_string())
        .filter(|d| !d.is_empty())
}

fn languages(raw: &RawRecord) -> Vec<String> {
    let summary = strings(raw.language.as_ref());
    if !summary.is_empty() {
        return summary;
    }
    raw.languages
        .as_ref()
        .map(OneOrMany::to_vec)
        .unwrap_or_default()
        .iter()
        .map(|l| l.code().to_string())
        .filter(|code| !code.is_empty())
        .collect()
}

fn clamp_rating(rating: f64) -> f64 {
    rating.clamp(RATING_FLOOR, RATING_MAX)
}

/// Stable pseudo-rating in `[2.0, 5.0)` derived from the record identity.
pub fn synthesize_rating(id: &str) -> f64 {
    let digest = Sha256::digest(id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    // top 53 bits -> [0, 1)
    let unit = (u64::from_be_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64;
    clamp_rating(RATING_FLOOR + unit * RATING_SPAN)
}
