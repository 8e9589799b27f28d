//! Document Template
//!
//! Produces the complete HTML document shipped to the browser: head
//! metadata, stylesheet links, the server-rendered application markup,
//! the serialized initial state for hydration, and script tags.
//!
//! The application markup is embedded verbatim - it is trusted,
//! already-serialized output of the render pass. Everything else that
//! reaches the document (title, favicon, asset references) is escaped.
//!
//! The initial state is embedded as inline script text. Every literal
//! `<` in the serialized JSON is replaced with `<` so a state
//! value containing `</script>` can never terminate the inline script
//! block early. This is the one correctness-critical transformation in
//! the template and must be preserved exactly.

use crate::dom::{escape_attr, escape_html};
use serde_json::Value;

/// Global variable the browser client reads to seed its cache before
/// hydrating. The browser entry point must use this same name.
pub const STATE_GLOBAL: &str = "__STATE__";

/// A rendered document, immutable once constructed.
#[derive(Debug, Clone)]
pub struct Document {
    /// Server-rendered application markup, embedded verbatim
    pub app: String,
    /// Document title
    pub title: String,
    /// Favicon path
    pub favicon: String,
    /// Stylesheet hrefs
    pub stylesheets: Vec<String>,
    /// Script srcs
    pub scripts: Vec<String>,
    /// Serialized data-client cache
    pub initial_state: Value,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            app: String::new(),
            title: String::new(),
            favicon: String::new(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            initial_state: Value::Object(serde_json::Map::new()),
        }
    }
}

impl Document {
    /// Render the document to a static HTML string.
    ///
    /// Pure: identical inputs produce byte-identical output.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(self.app.len() + 1024);

        html.push_str("<html lang=\"en\"><head>");
        html.push_str("<meta charset=\"utf-8\" />");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, shrink-to-fit=no\" />",
        );
        html.push_str(&format!(
            "<link rel=\"shortcut icon\" href=\"{}\" />",
            escape_attr(&self.favicon)
        ));
        html.push_str(&format!("<title>{}</title>", escape_html(&self.title)));

        for href in &self.stylesheets {
            html.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\" />",
                escape_attr(href)
            ));
        }

        html.push_str("</head><body>");

        // Trusted markup from the render pass; no sanitization here.
        html.push_str("<div id=\"root\">");
        html.push_str(&self.app);
        html.push_str("</div>");

        html.push_str(&format!(
            "<script>window.{} = {}</script>",
            STATE_GLOBAL,
            safe_json(&self.initial_state)
        ));

        for src in &self.scripts {
            html.push_str(&format!("<script src=\"{}\"></script>", escape_attr(src)));
        }

        html.push_str("</body></html>");
        html
    }
}

/// Serialize a value to JSON safe for embedding in an inline script:
/// every literal `<` becomes its unicode escape, so no string value can
/// contain a `</script` sequence in the output.
pub fn safe_json(value: &Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "{}".to_string())
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_render_complete_document() {
        let html = Document::default().render();
        assert!(html.starts_with("<html lang=\"en\"><head>"));
        assert!(html.contains("<div id=\"root\"></div>"));
        assert!(html.contains("window.__STATE__ = {}"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_app_markup_embedded_verbatim() {
        let doc = Document {
            app: "<main class=\"home\"><h1>Hi</h1></main>".to_string(),
            ..Default::default()
        };
        assert!(doc
            .render()
            .contains("<div id=\"root\"><main class=\"home\"><h1>Hi</h1></main></div>"));
    }

    #[test]
    fn test_title_escaped() {
        let doc = Document {
            title: "a < b & c".to_string(),
            ..Default::default()
        };
        assert!(doc.render().contains("<title>a &lt; b &amp; c</title>"));
    }

    #[test]
    fn test_assets_rendered() {
        let doc = Document {
            stylesheets: vec!["/app.a1b2.css".to_string()],
            scripts: vec!["/app.c3d4.js".to_string()],
            ..Default::default()
        };
        let html = doc.render();
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/app.a1b2.css\" />"));
        assert!(html.contains("<script src=\"/app.c3d4.js\"></script>"));
    }

    #[test]
    fn test_state_script_breakout_prevented() {
        let doc = Document {
            initial_state: json!({
                "q": {"title": "</script><script>alert(1)</script>"}
            }),
            ..Default::default()
        };
        let html = doc.render();

        // The state payload must not be able to close the script tag.
        // The only occurrences of "</script" are the tag boundaries the
        // template itself writes, never inside the state literal.
        let state_start = html.find("window.__STATE__ = ").unwrap();
        let state_end = html[state_start..].find("</script>").unwrap() + state_start;
        let state_literal = &html[state_start + "window.__STATE__ = ".len()..state_end];
        assert!(!state_literal.contains("</script"));
        assert!(state_literal.contains("\\u003c"));
    }

    #[test]
    fn test_state_round_trips_through_escape() {
        let original = json!({
            "q": {"title": "</script><script>alert(1)</script>", "n": 42}
        });
        let embedded = safe_json(&original);

        // < is a plain JSON unicode escape; parsing the embedded
        // literal reconstructs the object unchanged.
        let parsed: Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_render_is_pure() {
        let doc = Document {
            app: "<p>x</p>".to_string(),
            title: "T".to_string(),
            stylesheets: vec!["/a.css".to_string()],
            scripts: vec!["/a.js".to_string()],
            initial_state: json!({"k": [1, 2, 3]}),
            ..Default::default()
        };
        assert_eq!(doc.render(), doc.render());
    }
}
