use pulldown_cmark::{html, Parser};

/// Renders markdown to an HTML fragment. Pure; malformed input is
/// rendered best-effort like any markdown renderer.
pub fn render(markdown_text: &str) -> String {
    let parser = Parser::new(markdown_text);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
