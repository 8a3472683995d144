use tracing::warn;

use crate::app::{AppContext, ErrorKind, LibrisError, Result};
use crate::catalog::CoverSize;
use crate::cli::render;
use crate::cli::ThemeAction;
use crate::config::{ThemeMode, ThemeStore};
use crate::domain::{RawRecord, SectionPhase};
use crate::normalizer::NormalizeOverrides;
use crate::search::SearchSession;

pub async fn trending(ctx: &AppContext) -> Result<()> {
    let mut board = ctx.home_board();

    board
        .load_all(ctx.catalog.as_ref(), &ctx.normalizer, |section| {
            println!("{}", render::section_block(section));
        })
        .await;

    if let Some(banner) = board.banner() {
        println!("{}", banner);
    }
    Ok(())
}

pub async fn search(ctx: &AppContext, words: &[String], limit: Option<usize>) -> Result<()> {
    let query = words.join(" ");
    let mut session = match limit {
        Some(limit) => SearchSession::new(limit),
        None => ctx.search_session(),
    };

    // A blank query is recorded in the state and rendered like any other outcome
    if let Err(e) = session.submit(ctx.catalog.as_ref(), &ctx.normalizer, &query).await {
        if e.kind() != ErrorKind::Validation {
            return Err(e);
        }
    }

    print!("{}", render::search_block(session.state()));
    Ok(())
}

pub async fn discover(ctx: &AppContext, rounds: usize) -> Result<()> {
    let mut session = ctx.discovery_session();
    println!("Current: {}  Next: {}", session.current_label(), session.next_label());

    for _ in 0..rounds {
        let state = session.surprise(ctx.catalog.as_ref(), &ctx.normalizer).await;
        if let (SectionPhase::Failed, Some(kind)) = (state.phase(), state.error) {
            println!("{}", kind.section_message());
        }

        println!(
            "\nCurrent: {}  Next: {}",
            session.current_label(),
            session.next_label()
        );
        for record in &session.section().items {
            println!("  {}", render::record_line(record, None));
        }
    }
    Ok(())
}

pub async fn detail(ctx: &AppContext, key: &str, open_cover: bool) -> Result<()> {
    let raw = match ctx.catalog.fetch_detail(key).await {
        Ok(raw) => raw,
        Err(e) => {
            println!("{}", e.kind().detail_message());
            return Err(e);
        }
    };

    // The works record carries its own title and covers, so it doubles as
    // the summary the detail is merged into.
    let summary = ctx.normalizer.normalize(
        &RawRecord {
            key: Some(key.to_string()),
            ..raw.clone()
        },
        &NormalizeOverrides::default(),
    );

    let mut resolver = ctx.detail_resolver();
    if let Some(ticket) = resolver.open(summary.clone()) {
        resolver.apply(&ticket, Ok(raw), &ctx.normalizer);
    }
    let record = resolver.active().map(|a| a.record.clone()).unwrap_or(summary);

    let covers_base = ctx.config.catalog.covers_url.as_str();
    println!("{}", render::detail_block(&record, covers_base));

    if open_cover {
        match record
            .cover
            .as_ref()
            .and_then(|cover| cover.url(covers_base, CoverSize::Large))
        {
            Some(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                }
            }
            None => println!("No cover available"),
        }
    }
    Ok(())
}

pub fn theme(action: Option<ThemeAction>) -> Result<()> {
    let mut store = ThemeStore::open_default().map_err(|e| LibrisError::Config(e.to_string()))?;

    match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            store.toggle().map_err(|e| LibrisError::Config(e.to_string()))?;
        }
        ThemeAction::Set { mode } => {
            let mode: ThemeMode = mode.parse().map_err(LibrisError::Validation)?;
            store.set(mode).map_err(|e| LibrisError::Config(e.to_string()))?;
        }
    }

    println!("Theme: {}", store.mode());
    Ok(())
}
