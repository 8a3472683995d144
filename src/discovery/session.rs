use tracing::info;

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::discovery::{DiscoverySequencer, SUBJECTS};
use crate::domain::{DiscoveryState, SectionState};
use crate::normalizer::Normalizer;
use crate::section::SectionLoader;

/// Surprise-me page: rotates subjects and loads a page of books for each.
pub struct DiscoverySession {
    sequencer: DiscoverySequencer,
    loader: SectionLoader,
    has_searched: bool,
}

impl DiscoverySession {
    pub fn new(config: &BrowseConfig) -> Self {
        Self::with_limit(config.discovery_limit)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            sequencer: DiscoverySequencer::new(),
            loader: SectionLoader::subject("Discovery", SUBJECTS[0], limit).tagging_subject(),
            has_searched: false,
        }
    }

    /// Advance to the next subject and load its books.
    ///
    /// The sequencer moves even when the load fails; earlier books stay.
    pub async fn surprise(&mut self, catalog: &dyn Catalog, normalizer: &Normalizer) -> &SectionState {
        let subject = self.sequencer.advance();
        self.has_searched = true;
        info!("Discovering {}", subject);

        self.loader.retarget(subject);
        self.loader.trigger(catalog, normalizer).await
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn sequencer(&self) -> &DiscoverySequencer {
        &self.sequencer
    }

    pub fn current_label(&self) -> String {
        self.sequencer.current_label()
    }

    pub fn next_label(&self) -> String {
        self.sequencer.next_label()
    }

    pub fn section(&self) -> &SectionState {
        self.loader.state()
    }

    pub fn snapshot(&self) -> DiscoveryState {
        DiscoveryState {
            subject_index: self.sequencer.index(),
            last_books: self.loader.state().items.clone(),
        }
    }
}
