use std::path::Path;
use std::sync::Arc;

use crate::app::error::{LibrisError, Result};
use crate::catalog::{Catalog, HttpCatalog};
use crate::config::Config;
use crate::detail::DetailResolver;
use crate::discovery::DiscoverySession;
use crate::normalizer::Normalizer;
use crate::search::SearchSession;
use crate::section::HomeBoard;

pub struct AppContext {
    pub config: Config,
    pub catalog: Arc<dyn Catalog>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| LibrisError::Config(e.to_string()))?;

        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let catalog: Arc<dyn Catalog> = Arc::new(HttpCatalog::new(&config.catalog)?);
        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: Config, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            config,
            catalog,
            normalizer: Normalizer::new(),
        }
    }

    pub fn home_board(&self) -> HomeBoard {
        HomeBoard::new(&self.config.browse)
    }

    pub fn search_session(&self) -> SearchSession {
        SearchSession::new(self.config.browse.search_limit)
    }

    pub fn discovery_session(&self) -> DiscoverySession {
        DiscoverySession::new(&self.config.browse)
    }

    pub fn detail_resolver(&self) -> DetailResolver {
        DetailResolver::new()
    }
}
