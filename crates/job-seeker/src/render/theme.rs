use serde::Serialize;

/// Palette and typography for the demo page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub background: String,
    pub paper: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#0a66c2".to_string(),
            primary_light: "#057642".to_string(),
            primary_dark: "#004182".to_string(),
            background: "#f3f2ef".to_string(),
            paper: "#ffffff".to_string(),
            text_primary: "#191919".to_string(),
            text_secondary: "#666666".to_string(),
            font_family: "-apple-system,system-ui,BlinkMacSystemFont,Segoe UI,Roboto,Helvetica Neue,Arial,sans-serif".to_string(),
        }
    }
}

impl Theme {
    pub fn stylesheet(&self) -> String {
        let Theme {
            primary,
            primary_light,
            primary_dark,
            background,
            paper,
            text_primary,
            text_secondary,
            font_family,
        } = self;

        format!(
            r#":root {{ --primary: {primary}; --primary-light: {primary_light}; --primary-dark: {primary_dark}; --background: {background}; --paper: {paper}; --text: {text_primary}; --text-muted: {text_secondary}; }}
body {{ margin: 0; font-family: {font_family}; color: var(--text); background: linear-gradient(180deg, var(--background) 0%, var(--paper) 100%); }}
nav {{ display: flex; gap: 24px; padding: 12px 32px; background: var(--paper); border-bottom: 1px solid #e0e0e0; font-size: 12px; }}
.layout {{ display: flex; max-width: 1440px; margin: 0 auto; }}
.sidebar {{ width: 360px; background: var(--paper); border-right: 1px solid #e0e0e0; }}
.sidebar .count {{ padding: 8px 16px; color: var(--text-muted); }}
.sidebar button.row {{ display: block; width: 100%; text-align: left; padding: 12px 16px; border: 0; background: none; cursor: pointer; }}
.sidebar button.row.selected {{ background: #eef3f8; border-left: 3px solid var(--primary); }}
main {{ flex-grow: 1; padding: 32px; }}
.card {{ background: var(--paper); border-radius: 16px; padding: 24px; margin-bottom: 16px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }}
.tabs button {{ border: 0; background: none; padding: 8px 16px; cursor: pointer; }}
.tabs button.active {{ color: var(--primary); border-bottom: 2px solid var(--primary); font-weight: 600; }}
.chip {{ display: inline-block; border: 1px solid #c0c0c0; border-radius: 4px; padding: 2px 8px; margin-right: 8px; }}
.rich {{ white-space: pre-line; line-height: 1.8; }}
.notice {{ background: #fdecea; color: #611a15; padding: 12px 16px; border-radius: 8px; margin-bottom: 16px; }}
.primary {{ background: var(--primary); color: #fff; border: 0; border-radius: 16px; padding: 8px 24px; font-size: 1rem; }}
.primary:disabled {{ opacity: 0.5; }}
.modal {{ position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; }}
.modal .card {{ width: 760px; max-height: 90vh; overflow: auto; }}
.progress {{ height: 4px; background: #e0e0e0; }}
.progress span {{ display: block; height: 4px; background: var(--primary-light); }}
.steps span.current {{ color: var(--primary); font-weight: 600; }}
a {{ color: var(--primary); text-decoration: none; }}
a:hover {{ color: var(--primary-dark); text-decoration: underline; }}
"#
        )
    }
}
