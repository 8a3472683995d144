//! Cover image URLs. Pure string construction, no requests.

use crate::domain::CoverRef;

pub const COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverKey<'a> {
    Id(&'a str),
    Isbn(&'a str),
    Olid(&'a str),
}

impl<'a> CoverKey<'a> {
    fn parts(self) -> (&'static str, &'a str) {
        match self {
            CoverKey::Id(value) => ("id", value),
            CoverKey::Isbn(value) => ("isbn", value),
            CoverKey::Olid(value) => ("olid", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl CoverSize {
    pub fn code(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

/// Build a cover URL on the public covers host. Blank identifiers yield `None`.
pub fn cover_url(key: CoverKey<'_>, size: CoverSize) -> Option<String> {
    cover_url_with_base(COVERS_BASE_URL, key, size)
}

pub fn cover_url_with_base(base: &str, key: CoverKey<'_>, size: CoverSize) -> Option<String> {
    let (kind, value) = key.parts();
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(format!(
        "{}/b/{}/{}-{}.jpg",
        base.trim_end_matches('/'),
        kind,
        value,
        size.code()
    ))
}

impl CoverRef {
    pub fn url(&self, base: &str, size: CoverSize) -> Option<String> {
        match self {
            CoverRef::Id(id) if *id > 0 => {
                cover_url_with_base(base, CoverKey::Id(&id.to_string()), size)
            }
            CoverRef::Id(_) => None,
            CoverRef::Olid(olid) => cover_url_with_base(base, CoverKey::Olid(olid), size),
        }
    }
}
