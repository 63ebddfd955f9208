use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown (resumes, job descriptions) to HTML. Raw HTML in the
/// source is shown as text and the output goes through ammonia's default
/// policy so link targets are still filtered.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, events);
    ammonia::clean(&rendered)
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn renders_headings_lists_and_emphasis() {
        let html = render_markdown("## Experience\n\n- **Led** the design system\n- Shipped *fast*\n");
        assert!(html.contains("<h2>Experience</h2>"));
        assert!(html.contains("<li><strong>Led</strong> the design system</li>"));
        assert!(html.contains("<em>fast</em>"));
    }

    #[test]
    fn raw_html_is_displayed_not_executed() {
        let html = render_markdown("Hello <script>alert(1)</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn javascript_links_lose_their_target() {
        let html = render_markdown("[apply](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("apply"));
    }
}
