//! # Libris
//!
//! A terminal browser for the Open Library catalog.
//!
//! ## Architecture
//!
//! ```text
//! Catalog → Normalizer → Sections / Search / Discovery / Detail → CLI
//! ```
//!
//! - [`catalog`]: HTTP client for the public catalog endpoints
//! - [`normalizer`]: Turns loosely shaped catalog records into display records
//! - [`section`]: Independently loading lists and the trending board
//! - [`cli`]: Command-line front end
//!
//! ## Quick Start
//!
//! ```bash
//! # Trending page
//! libris trending
//!
//! # Search
//! libris search the left hand of darkness
//!
//! # Three rounds of "surprise me"
//! libris discover --rounds 3
//!
//! # Extended details
//! libris detail /works/OL45883W
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// catalog and normalizer.
pub mod app;

/// Catalog access.
///
/// - [`Catalog`](catalog::Catalog): Async trait over the remote catalog
/// - [`HttpCatalog`](catalog::HttpCatalog): reqwest-based implementation
/// - Cover image URL construction
pub mod catalog;

/// Command-line interface using clap.
pub mod cli;

/// Configuration and the persisted theme preference.
///
/// Loads from `~/.config/libris/config.toml`.
pub mod config;

/// On-demand extended detail with stale-response protection.
pub mod detail;

/// Subject rotation for the surprise-me page.
pub mod discovery;

/// Core domain models.
///
/// - [`RawRecord`](domain::RawRecord): Record as the catalog sends it
/// - [`DisplayRecord`](domain::DisplayRecord): Normalized record for display
/// - Page state for sections and search
pub mod domain;

/// Record normalization and detail merging.
pub mod normalizer;

/// Free-text search session with validation and outcome states.
pub mod search;

/// Independently loading book lists.
pub mod section;
