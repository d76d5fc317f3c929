//! Renders the ReDoc documentation page.

use tracing::{debug, error, warn};

use super::core::{matches_mount, normalize_mount, Middleware};
use super::spec_file::DEFAULT_SPEC_ROUTE;
use crate::docs::DocsTemplate;
use crate::resources::{ResourceRoot, HTML_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use crate::server::{ParsedRequest, ServeResponse};

pub const DEFAULT_DOCS_PATH: &str = "/docs";
pub const DEFAULT_TEMPLATE_PATH: &str = "Views/redoc.html";

/// Body of the 404 sent when the template file is missing.
pub const TEMPLATE_NOT_FOUND: &str = "Documentation template not found";

/// Answers `GET <docs_path>` with the rendered docs page.
#[derive(Debug, Clone)]
pub struct DocsPageMiddleware {
    docs_path: String,
    spec_url: String,
    template: DocsTemplate,
}

impl DocsPageMiddleware {
    pub fn new(template: DocsTemplate, docs_path: &str, spec_url: impl Into<String>) -> Self {
        Self {
            docs_path: normalize_mount(docs_path),
            spec_url: spec_url.into(),
            template,
        }
    }

    /// `/docs` pointing at `/openapi.yml`, template at `Views/redoc.html` below `root`.
    pub fn with_defaults(root: ResourceRoot) -> Self {
        Self::new(
            DocsTemplate::new(root, DEFAULT_TEMPLATE_PATH),
            DEFAULT_DOCS_PATH,
            DEFAULT_SPEC_ROUTE,
        )
    }

    #[must_use]
    pub fn docs_path(&self) -> &str {
        &self.docs_path
    }

    #[must_use]
    pub fn spec_url(&self) -> &str {
        &self.spec_url
    }

    #[must_use]
    pub fn respond(&self) -> ServeResponse {
        match self.template.render(&self.spec_url) {
            Ok(html) => {
                debug!(docs_path = %self.docs_path, spec_url = %self.spec_url, "rendered docs page");
                ServeResponse::ok(HTML_CONTENT_TYPE, html.into_bytes())
            }
            Err(e) if e.is_not_found() => {
                warn!(template = %self.template.relative_path(), error = %e, "docs template not found");
                ServeResponse::not_found(TEMPLATE_NOT_FOUND)
            }
            Err(e) => {
                error!(template = %self.template.relative_path(), error = %e, "failed to render docs page");
                ServeResponse::new(500, TEXT_CONTENT_TYPE, "Failed to render documentation page")
            }
        }
    }
}

impl Middleware for DocsPageMiddleware {
    fn before(&self, req: &ParsedRequest) -> Option<ServeResponse> {
        if !req.is_read() || !matches_mount(&self.docs_path, &req.path) {
            return None;
        }
        let res = self.respond();
        // HEAD goes out with Content-Length: 0; see ServeResponse::without_body.
        Some(if req.is_head() { res.without_body() } else { res })
    }
}
