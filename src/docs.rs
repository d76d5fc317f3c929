//! ReDoc documentation page rendering.
//!
//! The page is a thin HTML shell around the `<redoc>` web component. The
//! template lives on disk below the resource root and is rendered with
//! `minijinja` on every request; the only context value is `spec_url`.

use crate::error::ServeError;
use crate::resources::ResourceRoot;
use minijinja::{context, Environment};

/// Name the template is registered under. No extension, so minijinja does
/// not HTML-escape `/` in the URL.
const TEMPLATE_NAME: &str = "redoc";

/// Default template written by `openapi-serve init`.
pub const REDOC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>API Documentation</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/redoc/bundles/redoc.standalone.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <redoc spec-url="{{ spec_url }}"></redoc>
    <script src="https://cdn.jsdelivr.net/npm/redoc/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

/// Escape the characters that can end an HTML attribute value or open a tag.
///
/// `/`, `?` and `&` are left alone so the URL reads the same in the page
/// source; browsers decode the entities back before the viewer sees it.
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `source` with `spec_url` substituted.
///
/// The URL is attribute-escaped, so it is safe in either a single- or
/// double-quoted attribute.
pub fn render_template(source: &str, spec_url: &str) -> Result<String, ServeError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, source)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;
    Ok(tmpl.render(context! { spec_url => escape_attribute(spec_url) })?)
}

/// Template file below a [`ResourceRoot`]
#[derive(Debug, Clone)]
pub struct DocsTemplate {
    root: ResourceRoot,
    relative_path: String,
}

impl DocsTemplate {
    pub fn new(root: ResourceRoot, relative_path: impl Into<String>) -> Self {
        Self {
            root,
            relative_path: relative_path.into(),
        }
    }

    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Load the template from disk and render it.
    ///
    /// A missing file is [`ServeError::ResourceNotFound`].
    pub fn render(&self, spec_url: &str) -> Result<String, ServeError> {
        let source = self.root.read_to_string(&self.relative_path)?;
        render_template(&source, spec_url)
    }
}
