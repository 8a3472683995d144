use chrono::{DateTime, Utc};

use crate::app::ErrorKind;
use crate::domain::DisplayRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Loading,
    Ready,
    Failed,
}

/// Items of one independently loading section.
#[derive(Debug, Clone)]
pub struct SectionState {
    /// Catalog order, never re-sorted
    pub items: Vec<DisplayRecord>,
    pub is_loading: bool,
    pub error: Option<ErrorKind>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl SectionState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error: None,
            loaded_at: None,
        }
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn settle(&mut self, items: Vec<DisplayRecord>) {
        self.items = items;
        self.is_loading = false;
        self.error = None;
        self.loaded_at = Some(Utc::now());
    }

    /// Record a failure. Previously loaded items stay in place.
    pub fn fail(&mut self, kind: ErrorKind) {
        self.is_loading = false;
        self.error = Some(kind);
    }

    pub fn phase(&self) -> SectionPhase {
        if self.is_loading {
            SectionPhase::Loading
        } else if self.error.is_some() {
            SectionPhase::Failed
        } else {
            SectionPhase::Ready
        }
    }
}

impl Default for SectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    NotStarted,
    Searching,
    NoResults,
    Results(usize),
    Failed(ErrorKind),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<DisplayRecord>,
    pub has_searched: bool,
    pub is_loading: bool,
    pub error: Option<ErrorKind>,
}

impl SearchState {
    pub fn outcome(&self) -> SearchOutcome {
        if self.is_loading {
            SearchOutcome::Searching
        } else if let Some(kind) = self.error {
            SearchOutcome::Failed(kind)
        } else if !self.has_searched {
            SearchOutcome::NotStarted
        } else if self.results.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Results(self.results.len())
        }
    }
}

/// Snapshot of the surprise-me page.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryState {
    /// `None` until the first advance
    pub subject_index: Option<usize>,
    pub last_books: Vec<DisplayRecord>,
}
