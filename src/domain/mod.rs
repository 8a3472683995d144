pub mod raw;
pub mod record;
pub mod state;

pub use raw::{LanguageEntry, OneOrMany, RawRecord, SearchResponse, TextValue, TrendingResponse, YearValue};
pub use record::{CoverRef, DisplayRecord, PublishYear};
pub use state::{DiscoveryState, SearchOutcome, SearchState, SectionPhase, SectionState};
