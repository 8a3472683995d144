use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::app::{LibrisError, Result};
use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::domain::{RawRecord, SearchResponse, TrendingResponse};

/// Open Library over HTTPS.
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
        })
    }

    /// Client against another host, keeping the default settings otherwise.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let config = CatalogConfig {
            base_url: base_url.to_string(),
            ..CatalogConfig::default()
        };
        Self::new(&config)
    }

    /// Append path segments to the base URL, keeping any path prefix it has.
    fn endpoint<'a, I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LibrisError::Config(format!("{} cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn search_url(&self, field: &str, value: &str, limit: usize) -> Result<Url> {
        let mut url = self.endpoint(["search.json"])?;
        url.query_pairs_mut()
            .append_pair(field, value)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// `/works/OL1W`, `works/OL1W` and `/works/OL1W.json` all address the
    /// same record. The key only ever contributes path segments, so it can
    /// never move the request to another host.
    fn detail_url(&self, key: &str) -> Result<Url> {
        let key = key.trim().trim_end_matches(".json");
        let segments: Vec<&str> = key
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(LibrisError::Validation(format!("invalid record key {:?}", key)));
        };

        let file = format!("{}.json", last);
        self.endpoint(parents.iter().copied().chain([file.as_str()]))
    }

    /// GET and decode, leaving 404 to the caller.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LibrisError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn get_listing<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let label = url.to_string();
        self.get_json(url).await?.ok_or(LibrisError::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            url: label,
        })
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_trending(&self) -> Result<Vec<RawRecord>> {
        let url = self.endpoint(["trending", "daily.json"])?;
        let response: TrendingResponse = self.get_listing(url).await?;
        debug!("Trending returned {} works", response.works.len());
        Ok(response.works)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawRecord>> {
        let url = self.search_url("q", query, limit)?;
        let response: SearchResponse = self.get_listing(url).await?;
        debug!(
            "Search {:?} matched {:?}, returned {}",
            query,
            response.num_found,
            response.docs.len()
        );
        Ok(response.docs)
    }

    async fn search_by_subject(&self, subject: &str, limit: usize) -> Result<Vec<RawRecord>> {
        let url = self.search_url("subject", subject, limit)?;
        let response: SearchResponse = self.get_listing(url).await?;
        Ok(response.docs)
    }

    async fn fetch_detail(&self, key: &str) -> Result<RawRecord> {
        let url = self.detail_url(key)?;
        match self.get_json::<RawRecord>(url).await? {
            Some(record) if !record.is_not_found_marker() => Ok(record),
            _ => Err(LibrisError::NotFound(key.to_string())),
        }
    }
}
