/// HTML renderer for header-delimited sections
use crate::ast::{Emphasis, ListKind, Section};
use crate::parser::{scan_emphasis, scan_list};
use tracing::debug;

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    /// Render each section to its fragment and concatenate them in order.
    pub fn render(&self, sections: Vec<Section>) -> String {
        sections.into_iter().map(Section::to_html).collect()
    }

    /// Wrap the rendered sections in a complete HTML document.
    pub fn render_document(&self, sections: Vec<Section>, title: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>{}</title></head><body>{}</body></html>",
            title,
            self.render(sections)
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    /// Run every rewrite pass over the body and wrap it with the rendered header.
    pub fn to_html(mut self) -> String {
        self.body_text = render_body(&self.body_text);
        format!(
            "<section>{}<br><p>{}</p></section>",
            render_header(&self.header_text),
            self.body_text
        )
    }
}

/// `### Title` -> `<h3>Title</h3>`.
///
/// The level is the number of leading `#`s and is not clamped, so a seven-marker
/// line gives `<h7>`. One space after the markers is dropped.
pub fn render_header(header_text: &str) -> String {
    let level = header_text.chars().take_while(|&c| c == '#').count();
    let text = &header_text[level..];
    let text = text.strip_prefix(' ').unwrap_or(text);
    format!("<h{}>{}</h{}>", level, text, level)
}

/// The body half of the section pipeline: lists first, then emphasis.
pub fn render_body(body: &str) -> String {
    let mut body = rewrite_lists_to_fixed_point(body, ListKind::Ordered);
    body = rewrite_lists_to_fixed_point(&body, ListKind::Unordered);
    for kind in [Emphasis::Bold, Emphasis::Italic, Emphasis::Underline] {
        body = render_emphasis(&body, kind);
    }
    body
}

/// Collapse one list of the given kind. Returns `None` when there was nothing to collapse.
pub fn rewrite_lists(body: &str, kind: ListKind) -> Option<String> {
    let run = scan_list(body, kind)?;
    debug!(?kind, items = run.items.len(), "collapsing list");

    let tag = kind.tag();
    let mut html = format!("<{}>", tag);
    for item in &run.items {
        html.push_str(&format!("\n<li>{}</li>", item));
    }
    html.push_str(&format!("</{}><br>\n", tag));

    // Non-list lines inside the span are replaced along with the items.
    Some(format!(
        "{}{}{}",
        &body[..run.span.start],
        html,
        &body[run.span.end..]
    ))
}

/// Apply `rewrite_lists` until it stops changing the body.
pub fn rewrite_lists_to_fixed_point(body: &str, kind: ListKind) -> String {
    let mut body = body.to_string();
    while let Some(rewritten) = rewrite_lists(&body, kind) {
        body = rewritten;
    }
    body
}

/// Replace every emphasis span of one kind with its tag plus a trailing space.
///
/// Spans are found on the body as given and spliced in one by one, each splice
/// also swallowing the character after the closing marker. Offsets of later
/// spans are not adjusted for earlier splices, so several spans in one body can
/// land off target.
pub fn render_emphasis(body: &str, kind: Emphasis) -> String {
    let tag = kind.tag();
    let mut text = body.to_string();
    for span in scan_emphasis(body, kind) {
        let replacement = format!("<{}>{}</{}> ", tag, span.word, tag);
        text = splice_chars(&text, span.start, span.end + 1, &replacement);
    }
    text
}

pub fn render_bold(body: &str) -> String {
    render_emphasis(body, Emphasis::Bold)
}

pub fn render_italic(body: &str) -> String {
    render_emphasis(body, Emphasis::Italic)
}

pub fn render_underline(body: &str) -> String {
    render_emphasis(body, Emphasis::Underline)
}

/// `text[..start] + replacement + text[end..]` on char offsets, clamped to the text.
fn splice_chars(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let head = &text[..char_to_byte(text, start)];
    let tail = &text[char_to_byte(text, end)..];
    format!("{}{}{}", head, replacement, tail)
}

fn char_to_byte(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(byte, _)| byte)
}
