/// Sectionizer and marker scanners
///
/// Nothing in here mutates text. Each scanner reads an immutable body and
/// reports what it found; `renderer` decides how to splice the results in.
use crate::ast::{Emphasis, EmphasisSpan, ListKind, ListRun, Section};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Lists are only collapsed when a body holds more than this many markers.
pub const LIST_THRESHOLD: usize = 2;

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"(?m)^#{1,6}.+$").expect("Invalid header regex"))
}

fn list_item_regex(kind: ListKind) -> &'static Regex {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    static UNORDERED: OnceLock<Regex> = OnceLock::new();
    match kind {
        ListKind::Ordered => ORDERED
            .get_or_init(|| Regex::new(r"(?m)^\d\.[ \t]*(.*)$").expect("Invalid list regex")),
        ListKind::Unordered => UNORDERED
            .get_or_init(|| Regex::new(r"(?m)^-[^\S\n](.*)$").expect("Invalid list regex")),
    }
}

fn emphasis_regex(kind: Emphasis) -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    static ITALIC: OnceLock<Regex> = OnceLock::new();
    static UNDERLINE: OnceLock<Regex> = OnceLock::new();
    match kind {
        Emphasis::Bold => {
            BOLD.get_or_init(|| Regex::new(r"\*\*(\w+)\*\*").expect("Invalid bold regex"))
        }
        Emphasis::Italic => {
            ITALIC.get_or_init(|| Regex::new(r"\*(\w+)\*").expect("Invalid italic regex"))
        }
        Emphasis::Underline => {
            UNDERLINE.get_or_init(|| Regex::new(r"_(\w+)_").expect("Invalid underline regex"))
        }
    }
}

/// Split a document into one section per header line, in document order.
///
/// Text before the first header belongs to no section and is dropped.
pub fn split_sections(text: &str) -> Vec<Section> {
    let headers: Vec<_> = header_regex().find_iter(text).map(|m| m.range()).collect();

    let sections: Vec<Section> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let body_end = headers.get(i + 1).map_or(text.len(), |next| next.start);
            Section::new(&text[header.clone()], &text[header.end..body_end])
        })
        .collect();

    debug!(sections = sections.len(), "split document into sections");
    sections
}

/// Find the list of the given kind in `text`, if it has enough markers to count as one.
///
/// Every marker line in the body becomes an item, and the span runs from the
/// first marker to one character past the end of the last item's line.
pub fn scan_list(text: &str, kind: ListKind) -> Option<ListRun> {
    let mut first_start = None;
    let mut last_end = 0;
    let mut items = Vec::new();

    for caps in list_item_regex(kind).captures_iter(text) {
        let (Some(whole), Some(item)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if first_start.is_none() {
            first_start = Some(whole.start());
        }
        last_end = whole.end();
        items.push(item.as_str().to_string());
    }

    if items.len() <= LIST_THRESHOLD {
        return None;
    }
    let start = first_start?;

    // The character right after the last item (its newline) goes with the list.
    let end = text[last_end..]
        .chars()
        .next()
        .map_or(last_end, |c| last_end + c.len_utf8());

    Some(ListRun {
        kind,
        span: start..end,
        items,
    })
}

/// Find every unescaped emphasis span of one kind, left to right, without overlap.
///
/// A candidate directly preceded by a back-tick is rejected, and the scan picks up
/// again one character after where that candidate began.
pub fn scan_emphasis(text: &str, kind: Emphasis) -> Vec<EmphasisSpan> {
    let regex = emphasis_regex(kind);
    let mut spans = Vec::new();
    let mut pos = 0;
    // Running char count so offsets stay linear in the length of the text.
    let mut counted_bytes = 0;
    let mut counted_chars = 0;

    while let Some(caps) = regex.captures_at(text, pos) {
        let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        if text[..whole.start()].ends_with('`') {
            // Markers are ASCII, so the next char starts one byte later.
            pos = whole.start() + 1;
            continue;
        }

        counted_chars += text[counted_bytes..whole.start()].chars().count();
        counted_bytes = whole.start();
        let start = counted_chars;
        let end = start + whole.as_str().chars().count();

        trace!(?kind, start, end, word = word.as_str(), "emphasis span");
        spans.push(EmphasisSpan {
            kind,
            start,
            end,
            word: word.as_str().to_string(),
        });
        pos = whole.end();
    }

    spans
}
