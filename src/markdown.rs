use pulldown_cmark::{html, Options, Parser};

/// Render a post body written in Markdown to HTML.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = markdown_to_html("## Title\n\nsome *emphasis* here");
        assert!(html.contains("<h2>Title</h2>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_renders_strikethrough_extension() {
        let html = markdown_to_html("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        assert_eq!(markdown_to_html("hello"), "<p>hello</p>\n");
    }
}
