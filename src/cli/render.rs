//! Plain-text rendering of records and page state.

use std::fmt::Write;

use crate::catalog::CoverSize;
use crate::domain::{DisplayRecord, SearchOutcome, SearchState, SectionPhase};
use crate::section::SectionLoader;

pub fn record_line(record: &DisplayRecord, position: Option<usize>) -> String {
    let mut line = String::new();
    if let Some(position) = position {
        let _ = write!(line, "#{:<3}", position + 1);
    }
    let _ = write!(
        line,
        "{} by {} ({})  {:.1}/5",
        record.title, record.author, record.publish_year, record.rating
    );
    if let Some(subject) = &record.subject_tag {
        let _ = write!(line, "  [{}]", subject);
    }
    line
}

pub fn section_block(section: &SectionLoader) -> String {
    let mut out = format!("== {} ==\n", section.title());
    let state = section.state();

    match state.phase() {
        SectionPhase::Loading => out.push_str("  loading...\n"),
        SectionPhase::Failed => {
            if let Some(kind) = state.error {
                let _ = writeln!(out, "  ! {}", kind.section_message());
            }
        }
        SectionPhase::Ready if state.items.is_empty() => out.push_str("  (no books)\n"),
        SectionPhase::Ready => {}
    }

    let show_position = section.is_trending();
    for (i, record) in state.items.iter().enumerate() {
        let _ = writeln!(out, "  {}", record_line(record, show_position.then_some(i)));
    }
    out
}

pub fn search_block(state: &SearchState) -> String {
    match state.outcome() {
        SearchOutcome::NotStarted => "Start your search\n".to_string(),
        SearchOutcome::Searching => "Searching for books...\n".to_string(),
        SearchOutcome::Failed(kind) => format!("{}\n", kind.search_message()),
        SearchOutcome::NoResults => format!(
            "No results found\nWe couldn't find any books matching \"{}\". Try searching with different keywords.\n",
            state.query
        ),
        SearchOutcome::Results(count) => {
            let mut out = format!(
                "Found {} result{} for \"{}\"\n",
                count,
                if count == 1 { "" } else { "s" },
                state.query
            );
            for record in &state.results {
                let _ = writeln!(out, "  {}", record_line(record, None));
            }
            out
        }
    }
}

/// Cover URL, falling back to the placeholder text when the record has none.
pub fn cover_line(record: &DisplayRecord, covers_base: &str) -> String {
    record
        .cover
        .as_ref()
        .and_then(|cover| cover.url(covers_base, CoverSize::Large))
        .unwrap_or_else(|| "(no cover)".to_string())
}

pub fn detail_block(record: &DisplayRecord, covers_base: &str) -> String {
    let mut out = format!("{}\n", record.title);
    let _ = writeln!(out, "  Author: {}", record.author_list());
    let _ = writeln!(out, "  First Published: {}", record.publish_year);
    if let Some(pages) = record.page_count {
        let _ = writeln!(out, "  Pages: {}", pages);
    }
    if !record.languages.is_empty() {
        let _ = writeln!(out, "  Language: {}", record.languages.join(", "));
    }
    let _ = writeln!(out, "  Rating: {:.1}", record.rating);
    let _ = writeln!(out, "  Cover: {}", cover_line(record, covers_base));
    let _ = writeln!(out, "\n  Description\n  {}", record.description());
    if !record.subjects.is_empty() {
        let _ = writeln!(out, "\n  Subjects: {}", record.display_subjects().join(", "));
    }
    out
}
