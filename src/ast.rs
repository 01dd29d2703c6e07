/// Data types for header-delimited Markdown documents
use serde::Serialize;
use std::ops::Range;

/// One header line plus everything up to the next header (or end of document).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// The full header line, markers included, trimmed of surrounding whitespace.
    pub header_text: String,
    /// Raw text between this header and the next one. Rewritten in place while rendering.
    pub body_text: String,
}

impl Section {
    pub fn new(header_text: &str, body_text: &str) -> Self {
        Section {
            header_text: header_text.trim().to_string(),
            body_text: body_text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,   // `1. item`
    Unordered, // `- item`
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,      // `**word**` -> <b>
    Italic,    // `*word*` -> <i>
    Underline, // `_word_` -> <u>
}

impl Emphasis {
    pub fn tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "b",
            Emphasis::Italic => "i",
            Emphasis::Underline => "u",
        }
    }
}

/// A list found in a section body, ready to be collapsed into one HTML list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRun {
    pub kind: ListKind,
    /// Byte range in the scanned text that the list replaces. Starts at the first
    /// marker and ends one character past the last item's line.
    pub span: Range<usize>,
    pub items: Vec<String>,
}

/// An emphasis marker pair around a single word.
///
/// Offsets are character offsets into the text as it was when scanned. They are
/// applied one after another to a string that changes length, so later spans can
/// drift; see `renderer::render_emphasis`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmphasisSpan {
    pub kind: Emphasis,
    pub start: usize,
    pub end: usize,
    pub word: String,
}
