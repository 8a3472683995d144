//! Free-text browse flow.

use tracing::{info, warn};

use crate::app::{ErrorKind, LibrisError, Result};
use crate::catalog::{Catalog, DEFAULT_SEARCH_LIMIT};
use crate::domain::SearchState;
use crate::normalizer::{NormalizeOverrides, Normalizer};

pub struct SearchSession {
    limit: usize,
    state: SearchState,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT)
    }
}

impl SearchSession {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run a search.
    ///
    /// A blank query is rejected with [`LibrisError::Validation`] before any
    /// request. Only `error` records the rejection; the query, results and
    /// `has_searched` keep their previous values. Transport failures are
    /// absorbed into the state: results are cleared and `error` is set.
    pub async fn submit(
        &mut self,
        catalog: &dyn Catalog,
        normalizer: &Normalizer,
        query: &str,
    ) -> Result<&SearchState> {
        let query = query.trim();
        if query.is_empty() {
            self.state.error = Some(ErrorKind::Validation);
            return Err(LibrisError::Validation("empty query".to_string()));
        }

        self.state.query = query.to_string();
        self.state.has_searched = true;
        self.state.is_loading = true;
        self.state.error = None;

        match catalog.search(query, self.limit).await {
            Ok(raw) => {
                let overrides = NormalizeOverrides::default();
                self.state.results = raw
                    .iter()
                    .map(|record| normalizer.normalize(record, &overrides))
                    .collect();
                info!("Search {:?} returned {} results", query, self.state.results.len());
            }
            Err(e) => {
                warn!("Search {:?} failed: {}", query, e);
                self.state.results.clear();
                self.state.error = Some(e.kind());
            }
        }
        self.state.is_loading = false;

        Ok(&self.state)
    }

    pub fn clear(&mut self) {
        self.state = SearchState::default();
    }
}
