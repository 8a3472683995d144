//! On-demand extended detail for the record being inspected.
//!
//! Requests are keyed to the record identity and a generation counter. A
//! response is only applied while the same open of the same record is still
//! active; anything else is discarded.

use tracing::{debug, warn};

use crate::app::{ErrorKind, Result};
use crate::catalog::Catalog;
use crate::domain::{DisplayRecord, RawRecord};
use crate::normalizer::Normalizer;

/// Identifies one in-flight detail request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub record_id: String,
    pub key: String,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct ActiveDetail {
    pub record: DisplayRecord,
    pub is_loading: bool,
    pub error: Option<ErrorKind>,
    generation: u64,
}

#[derive(Default)]
pub struct DetailResolver {
    active: Option<ActiveDetail>,
    generation: u64,
}

impl DetailResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveDetail> {
        self.active.as_ref()
    }

    /// Start inspecting `record`. Returns a ticket when a detail fetch is needed.
    pub fn open(&mut self, record: DisplayRecord) -> Option<DetailTicket> {
        self.generation += 1;
        let key = record.key.clone().filter(|_| record.has_key());
        let ticket = key.map(|key| DetailTicket {
            record_id: record.id.clone(),
            key,
            generation: self.generation,
        });

        self.active = Some(ActiveDetail {
            is_loading: ticket.is_some(),
            error: None,
            generation: self.generation,
            record,
        });
        ticket
    }

    /// Stop inspecting. Responses still in flight will be discarded.
    pub fn close(&mut self) {
        self.generation += 1;
        self.active = None;
    }

    /// Perform the detail request for a ticket without touching state.
    pub async fn fetch(catalog: &dyn Catalog, ticket: &DetailTicket) -> Result<RawRecord> {
        debug!("Fetching detail for {}", ticket.key);
        catalog.fetch_detail(&ticket.key).await
    }

    /// Apply a finished request. Returns `false` when the ticket is stale.
    pub fn apply(&mut self, ticket: &DetailTicket, outcome: Result<RawRecord>, normalizer: &Normalizer) -> bool {
        let Some(active) = self
            .active
            .as_mut()
            .filter(|a| a.generation == ticket.generation && a.record.id == ticket.record_id)
        else {
            debug!("Discarding stale detail response for {}", ticket.key);
            return false;
        };

        active.is_loading = false;
        match outcome {
            Ok(detail) => {
                active.record = normalizer.merge_detail(&active.record, &detail);
                active.error = None;
            }
            Err(e) => {
                warn!("Detail for {} failed: {}", ticket.key, e);
                active.error = Some(e.kind());
            }
        }
        true
    }

    /// Open `record`, fetch its detail and return what is displayed afterwards.
    ///
    /// Records without a key are returned unchanged. On failure the summary
    /// record is returned as-is.
    pub async fn resolve_detail(
        &mut self,
        catalog: &dyn Catalog,
        normalizer: &Normalizer,
        record: DisplayRecord,
    ) -> DisplayRecord {
        let Some(ticket) = self.open(record.clone()) else {
            return record;
        };
        let outcome = Self::fetch(catalog, &ticket).await;
        self.apply(&ticket, outcome, normalizer);

        self.active
            .as_ref()
            .map(|a| a.record.clone())
            .unwrap_or(record)
    }
}
