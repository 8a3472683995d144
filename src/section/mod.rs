//! Independently loading content sections.
//!
//! Each [`SectionLoader`] owns one [`SectionState`] and is only mutated by the
//! task driving it, so sections never coordinate through shared state.

pub mod board;

pub use board::{HomeBoard, TRENDING_TITLE};

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::domain::SectionState;
use crate::normalizer::{NormalizeOverrides, Normalizer};

/// Which catalog operation feeds a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionQuery {
    Trending,
    Subject { subject: String, limit: usize },
}

pub struct SectionLoader {
    title: String,
    query: SectionQuery,
    display_limit: usize,
    tag_subject: bool,
    state: SectionState,
}

impl SectionLoader {
    pub fn new(title: impl Into<String>, query: SectionQuery, display_limit: usize) -> Self {
        Self {
            title: title.into(),
            query,
            display_limit,
            tag_subject: false,
            state: SectionState::new(),
        }
    }

    pub fn trending(display_limit: usize) -> Self {
        Self::new(TRENDING_TITLE, SectionQuery::Trending, display_limit)
    }

    /// Subject section requesting and showing `limit` records.
    pub fn subject(title: impl Into<String>, subject: &str, limit: usize) -> Self {
        let query = SectionQuery::Subject {
            subject: subject.to_string(),
            limit,
        };
        Self::new(title, query, limit)
    }

    /// Tag every loaded record with the section's subject.
    pub fn tagging_subject(mut self) -> Self {
        self.tag_subject = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn query(&self) -> &SectionQuery {
        &self.query
    }

    pub fn state(&self) -> &SectionState {
        &self.state
    }

    pub fn is_trending(&self) -> bool {
        self.query == SectionQuery::Trending
    }

    /// Point the section at another subject. Current items stay until the next load.
    pub fn retarget(&mut self, subject: &str) {
        if let SectionQuery::Subject { subject: current, .. } = &mut self.query {
            *current = subject.to_string();
        }
    }

    /// Fetch, normalize and store the section's records.
    ///
    /// A failure records the error kind and keeps whatever items were
    /// loaded before.
    pub async fn trigger(&mut self, catalog: &dyn Catalog, normalizer: &Normalizer) -> &SectionState {
        self.state.begin();

        let (fetched, overrides) = match &self.query {
            SectionQuery::Trending => (catalog.fetch_trending().await, NormalizeOverrides::default()),
            SectionQuery::Subject { subject, limit } => {
                let overrides = if self.tag_subject {
                    NormalizeOverrides::tagged(subject)
                } else {
                    NormalizeOverrides::default()
                };
                (catalog.search_by_subject(subject, *limit).await, overrides)
            }
        };

        match fetched {
            Ok(raw) => {
                let items = raw
                    .iter()
                    .take(self.display_limit)
                    .map(|record| normalizer.normalize(record, &overrides))
                    .collect::<Vec<_>>();
                info!("Section {:?} loaded {} items", self.title, items.len());
                self.state.settle(items);
            }
            Err(e) => {
                warn!("Section {:?} failed: {}", self.title, e);
                self.state.fail(e.kind());
            }
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ErrorKind;
    use crate::catalog::mock::{titled, MockCatalog};
    use crate::domain::SectionPhase;

    #[tokio::test]
    async fn test_failure_keeps_prior_items() {
        let catalog = MockCatalog::new();
        catalog.push_subject("science", Ok(vec![titled("/works/OL1W", "Cosmos")]));
        catalog.push_subject("science", Err(ErrorKind::Transport));
        let normalizer = Normalizer::new();
        let mut section = SectionLoader::subject("Science & Technology", "science", 6);

        section.trigger(&catalog, &normalizer).await;
        assert_eq!(section.state().items.len(), 1);

        let state = section.trigger(&catalog, &normalizer).await;
        assert_eq!(state.error, Some(ErrorKind::Transport));
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "Cosmos");
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let catalog = MockCatalog::new();
        catalog.push_trending(Err(ErrorKind::Transport));
        catalog.push_trending(Ok(vec![titled("/works/OL1W", "A"), titled("/works/OL2W", "B")]));
        let normalizer = Normalizer::new();
        let mut section = SectionLoader::trending(12);

        section.trigger(&catalog, &normalizer).await;
        assert_eq!(section.state().phase(), SectionPhase::Failed);
        assert!(section.state().items.is_empty());

        let state = section.trigger(&catalog, &normalizer).await;
        assert_eq!(state.error, None);
        assert_eq!(state.phase(), SectionPhase::Ready);
        assert_eq!(state.items.len(), 2);
    }

    #[tokio::test]
    async fn test_display_limit_truncates_in_catalog_order() {
        let catalog = MockCatalog::new();
        let works = (0..20)
            .map(|i| titled(&format!("/works/OL{}W", i), &format!("Book {}", i)))
            .collect();
        catalog.push_trending(Ok(works));
        let normalizer = Normalizer::new();
        let mut section = SectionLoader::trending(12);

        let state = section.trigger(&catalog, &normalizer).await;
        assert_eq!(state.items.len(), 12);
        let titles: Vec<_> = state.items.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles[0], "Book 0");
        assert_eq!(titles[11], "Book 11");
    }

    #[tokio::test]
    async fn test_subject_request_and_tagging() {
        let catalog = MockCatalog::new();
        catalog.push_subject("mystery", Ok(vec![titled("/works/OL9W", "Gone Girl")]));
        let normalizer = Normalizer::new();
        let mut section = SectionLoader::subject("Discovery", "mystery", 12).tagging_subject();

        let state = section.trigger(&catalog, &normalizer).await;
        assert_eq!(state.items[0].subject_tag.as_deref(), Some("mystery"));
        assert_eq!(
            catalog.subject_requests.lock().unwrap().as_slice(),
            &[("mystery".to_string(), 12)]
        );
    }

    #[tokio::test]
    async fn test_retarget_changes_next_request() {
        let catalog = MockCatalog::new();
        let normalizer = Normalizer::new();
        let mut section = SectionLoader::subject("Discovery", "fiction", 12);
        section.retarget("poetry");

        section.trigger(&catalog, &normalizer).await;
        assert_eq!(catalog.subject_requests.lock().unwrap()[0].0, "poetry");
    }
}
