use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::normalizer::Normalizer;
use crate::section::SectionLoader;

pub const TRENDING_TITLE: &str = "Trending Books";

/// The trending page: trending works plus one section per configured subject.
pub struct HomeBoard {
    sections: Vec<SectionLoader>,
    /// Page-level message shown when the trending section fails
    banner: Option<String>,
}

impl HomeBoard {
    pub fn new(config: &BrowseConfig) -> Self {
        let mut sections = vec![SectionLoader::trending(config.trending_limit)];
        sections.extend(
            config
                .home_sections
                .iter()
                .map(|s| SectionLoader::subject(s.title.as_str(), &s.subject, config.section_limit)),
        );
        Self::with_sections(sections)
    }

    pub fn with_sections(sections: Vec<SectionLoader>) -> Self {
        Self {
            sections,
            banner: None,
        }
    }

    pub fn sections(&self) -> &[SectionLoader] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&SectionLoader> {
        self.sections.iter().find(|s| s.title() == title)
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Load every section concurrently on the current task.
    ///
    /// `on_settled` sees each section as soon as its own request completes,
    /// in completion order, so a slow or failing section never holds back
    /// the others.
    pub async fn load_all<F>(&mut self, catalog: &dyn Catalog, normalizer: &Normalizer, mut on_settled: F)
    where
        F: FnMut(&SectionLoader),
    {
        self.banner = None;

        let mut pending = self
            .sections
            .iter_mut()
            .map(|section| settle(section, catalog, normalizer))
            .collect::<FuturesUnordered<_>>();

        while let Some(section) = pending.next().await {
            debug!("Section {:?} settled", section.title());
            if section.is_trending() {
                if let Some(kind) = section.state().error {
                    self.banner = Some(kind.trending_message().to_string());
                }
            }
            on_settled(section);
        }
    }
}

async fn settle<'a>(
    section: &'a mut SectionLoader,
    catalog: &dyn Catalog,
    normalizer: &Normalizer,
) -> &'a SectionLoader {
    section.trigger(catalog, normalizer).await;
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ErrorKind;
    use crate::catalog::mock::{titled, MockCatalog};
    use crate::domain::SectionPhase;

    fn trending_works(count: usize) -> Vec<crate::domain::RawRecord> {
        (0..count)
            .map(|i| {
                let mut raw = titled(&format!("/works/OL{}W", i + 1), &format!("Trending {}", i + 1));
                if i != 4 {
                    raw.cover_i = Some(1000 + i as i64);
                }
                raw
            })
            .collect()
    }

    #[tokio::test]
    async fn test_trending_with_missing_cover() {
        let catalog = MockCatalog::new();
        catalog.push_trending(Ok(trending_works(12)));
        let normalizer = Normalizer::new();
        let mut board = HomeBoard::new(&BrowseConfig::default());

        board.load_all(&catalog, &normalizer, |_| {}).await;

        let trending = board.section(TRENDING_TITLE).unwrap().state();
        assert_eq!(trending.items.len(), 12);
        assert_eq!(trending.items[4].cover, None);
        assert!(trending.items.iter().enumerate().all(|(i, r)| i == 4 || r.cover.is_some()));
        assert_eq!(board.banner(), None);
    }

    #[tokio::test]
    async fn test_fiction_section_with_fewer_results() {
        let catalog = MockCatalog::new();
        catalog.push_subject(
            "fiction",
            Ok((0..4).map(|i| titled(&format!("/works/F{}W", i), "Novel")).collect()),
        );
        let normalizer = Normalizer::new();
        let mut board = HomeBoard::new(&BrowseConfig::default());

        board.load_all(&catalog, &normalizer, |_| {}).await;

        let fiction = board.section("Popular Fiction").unwrap().state();
        assert_eq!(fiction.items.len(), 4);
        assert!(!fiction.is_loading);
        assert!(catalog
            .subject_requests
            .lock()
            .unwrap()
            .contains(&("fiction".to_string(), 6)));
    }

    #[tokio::test]
    async fn test_failures_stay_local_and_trending_sets_banner() {
        let catalog = MockCatalog::new();
        catalog.push_trending(Err(ErrorKind::Transport));
        catalog.push_subject("science", Err(ErrorKind::Transport));
        catalog.push_subject("history", Ok(vec![titled("/works/H1W", "SPQR")]));
        let normalizer = Normalizer::new();
        let mut board = HomeBoard::new(&BrowseConfig::default());

        let mut settled = Vec::new();
        board
            .load_all(&catalog, &normalizer, |s| settled.push(s.title().to_string()))
            .await;

        assert_eq!(settled.len(), 4);
        assert_eq!(board.banner(), Some("Failed to fetch trending books"));
        assert_eq!(
            board.section("Science & Technology").unwrap().state().phase(),
            SectionPhase::Failed
        );
        let history = board.section("History & Biography").unwrap().state();
        assert_eq!(history.phase(), SectionPhase::Ready);
        assert_eq!(history.items[0].title, "SPQR");
    }

    #[tokio::test]
    async fn test_reload_clears_banner() {
        let catalog = MockCatalog::new();
        catalog.push_trending(Err(ErrorKind::Transport));
        catalog.push_trending(Ok(trending_works(3)));
        let normalizer = Normalizer::new();
        let mut board = HomeBoard::with_sections(vec![SectionLoader::trending(12)]);

        board.load_all(&catalog, &normalizer, |_| {}).await;
        assert!(board.banner().is_some());

        board.load_all(&catalog, &normalizer, |_| {}).await;
        assert_eq!(board.banner(), None);
        assert_eq!(board.sections()[0].state().items.len(), 3);
    }
}
