/// A section-by-section Markdown to HTML converter
pub mod ast;
pub mod config;
pub mod io;
pub mod parser;
pub mod renderer;

pub use ast::{Emphasis, ListKind, Section};
pub use parser::split_sections;
pub use renderer::{HtmlRenderer, render_header};

/// Convert a Markdown document into a complete HTML page titled `title`.
pub fn convert(markdown: &str, title: &str) -> String {
    let sections = split_sections(markdown);
    HtmlRenderer::new().render_document(sections, title)
}

/// Render only the section fragments, without the surrounding document.
pub fn render_sections(markdown: &str) -> String {
    HtmlRenderer::new().render(split_sections(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SHELL_START: &str =
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>T</title></head><body>";

    #[test]
    fn test_empty_input() {
        assert_eq!(render_sections(""), "");
        assert_eq!(convert("", "T"), format!("{SHELL_START}</body></html>"));
    }

    #[test]
    fn test_headerless_input_is_just_the_shell() {
        assert_eq!(
            convert("no headers\n1. a\n2. b\n3. c\n", "T"),
            format!("{SHELL_START}</body></html>")
        );
    }

    #[test]
    fn test_intro_and_steps() {
        let markdown = "# Intro\nHello **world**.\n\n## Steps\n1. First\n2. Second\n3. Third\n";
        assert_eq!(
            render_sections(markdown),
            "<section><h1>Intro</h1><br><p>\nHello <b>world</b> \n\n</p></section>\
             <section><h2>Steps</h2><br><p>\n<ol>\n<li>First</li>\n<li>Second</li>\n<li>Third</li></ol><br>\n</p></section>"
        );
    }

    #[test]
    fn test_title_is_inserted_verbatim() {
        let html = convert("# A\n", "Internetified!");
        assert!(html.contains("<title>Internetified!</title>"));
        assert!(html.ends_with("<section><h1>A</h1><br><p>\n</p></section></body></html>"));
    }
}
