//! Raw catalog records as they come off the wire.
//!
//! Catalog payloads are loosely structured: the same field can be a scalar in
//! one response and a list in another, descriptions may be wrapped in a
//! `{ "value": ... }` object, and any field can be missing. Every known field
//! is therefore optional and deserialized leniently: a value of an unexpected
//! shape reads as absent instead of failing the whole response.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A scalar or a sequence of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.first(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            OneOrMany::One(value) => vec![value.clone()],
            OneOrMany::Many(values) => values.clone(),
        }
    }
}

/// Free text that is either a plain string or a `{ "type": ..., "value": ... }` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Wrapped { value: String },
}

impl TextValue {
    pub fn as_str(&self) -> &str {
        match self {
            TextValue::Plain(text) => text,
            TextValue::Wrapped { value } => value,
        }
    }
}

/// A year given as a number or as free text ("1965", "c. 1920").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

/// Language as a bare code (`"eng"`) or a reference object (`{ "key": "/languages/eng" }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    Code(String),
    Ref { key: String },
}

impl LanguageEntry {
    pub fn code(&self) -> &str {
        match self {
            LanguageEntry::Code(code) => code,
            LanguageEntry::Ref { key } => key.rsplit('/').next().unwrap_or(key),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author_name: Option<OneOrMany<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_i: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_edition_key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub covers: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub first_publish_year: Option<YearValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub publish_year: Option<OneOrMany<YearValue>>,
    #[serde(default, deserialize_with = "lenient")]
    pub subject: Option<OneOrMany<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub subjects: Option<OneOrMany<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<OneOrMany<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<OneOrMany<LanguageEntry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub number_of_pages_median: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub number_of_pages: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<TextValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub ratings_average: Option<f64>,
    /// Everything the client does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RawRecord {
    /// Whether the catalog answered with its `{"error": "notfound"}` marker.
    pub fn is_not_found_marker(&self) -> bool {
        self.extra
            .get("error")
            .and_then(Value::as_str)
            .is_some_and(|e| e.eq_ignore_ascii_case("notfound"))
    }
}

/// Envelope of `/trending/{period}.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub works: Vec<RawRecord>,
}

/// Envelope of `/search.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "numFound")]
    pub num_found: Option<u64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub docs: Vec<RawRecord>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<RawRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
