pub mod cover;
pub mod http_catalog;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::RawRecord;

pub use cover::{cover_url, cover_url_with_base, CoverKey, CoverSize, COVERS_BASE_URL};
pub use http_catalog::HttpCatalog;

pub const DEFAULT_SEARCH_LIMIT: usize = 24;
pub const DEFAULT_SUBJECT_LIMIT: usize = 12;

/// Remote book catalog.
///
/// Every call is a single attempt; callers decide whether a failure is
/// surfaced or absorbed into view state.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Today's trending works.
    async fn fetch_trending(&self) -> Result<Vec<RawRecord>>;

    /// Free-text search. Callers must not pass a blank query.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawRecord>>;

    async fn search_by_subject(&self, subject: &str, limit: usize) -> Result<Vec<RawRecord>>;

    /// Extended record for a catalog key such as `/works/OL45883W`.
    ///
    /// Fails with [`LibrisError::NotFound`](crate::app::LibrisError::NotFound)
    /// when the catalog reports the record as absent.
    async fn fetch_detail(&self, key: &str) -> Result<RawRecord>;
}
