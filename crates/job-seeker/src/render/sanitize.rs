use std::collections::{HashMap, HashSet};

/// Tags permitted in narrative payload fields.
pub const ALLOWED_TAGS: [&str; 5] = ["p", "br", "strong", "em", "a"];

/// Attributes permitted on links; no other element keeps attributes.
pub const ALLOWED_LINK_ATTRIBUTES: [&str; 2] = ["href", "target"];

/// Allow-list sanitizer for company descriptions, cover letters and any other
/// pasted narrative rendered as formatted text.
pub struct RichTextSanitizer {
    builder: ammonia::Builder<'static>,
}

impl Default for RichTextSanitizer {
    fn default() -> Self {
        let mut builder = ammonia::Builder::default();
        builder
            .tags(ALLOWED_TAGS.into_iter().collect::<HashSet<_>>())
            .tag_attributes(HashMap::from([(
                "a",
                ALLOWED_LINK_ATTRIBUTES.into_iter().collect::<HashSet<_>>(),
            )]))
            .generic_attributes(HashSet::new())
            .link_rel(None);
        Self { builder }
    }
}

impl RichTextSanitizer {
    pub fn clean(&self, raw: &str) -> String {
        self.builder.clean(raw).to_string()
    }
}

/// Sanitize with the shared allow-list policy.
pub fn sanitize_rich_text(raw: &str) -> String {
    RichTextSanitizer::default().clean(raw)
}

#[cfg(test)]
mod tests {
    use super::sanitize_rich_text;

    #[test]
    fn keeps_allowed_formatting() {
        let cleaned = sanitize_rich_text(
            r#"<p><strong>About Stripe</strong><br><em>Remote</em> <a href="https://stripe.com/jobs" target="_blank">Careers</a></p>"#,
        );
        assert_eq!(
            cleaned,
            r#"<p><strong>About Stripe</strong><br><em>Remote</em> <a href="https://stripe.com/jobs" target="_blank">Careers</a></p>"#
        );
    }

    #[test]
    fn drops_scripts_and_their_content() {
        let cleaned = sanitize_rich_text("<p>Hello</p><script>alert('x')</script>");
        assert_eq!(cleaned, "<p>Hello</p>");
    }

    #[test]
    fn strips_disallowed_tags_but_keeps_text() {
        let cleaned = sanitize_rich_text("<div><h1>Title</h1><span>body</span></div>");
        assert_eq!(cleaned, "Titlebody");
    }

    #[test]
    fn strips_event_handlers_and_foreign_attributes() {
        let cleaned = sanitize_rich_text(
            r#"<p class="x" onclick="steal()">hi</p><a href="/a" style="color:red" rel="opener">a</a>"#,
        );
        assert_eq!(cleaned, r#"<p>hi</p><a href="/a">a</a>"#);
    }

    #[test]
    fn removes_javascript_urls() {
        let cleaned = sanitize_rich_text(r#"<a href="javascript:alert(1)">click</a>"#);
        assert!(!cleaned.contains("javascript"));
        assert!(cleaned.contains("click"));
    }
}
