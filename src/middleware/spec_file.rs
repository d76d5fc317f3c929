//! Serves the OpenAPI document at a fixed route.

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::core::{matches_mount, normalize_mount, Middleware};
use crate::provider::{FileSpecProvider, SpecProvider};
use crate::resources::ResourceRoot;
use crate::server::{ParsedRequest, ServeResponse};

/// Route the document is served on unless overridden.
pub const DEFAULT_SPEC_ROUTE: &str = "/openapi.yml";

/// Body of the 404 sent when the document is missing or empty.
pub const SPEC_NOT_FOUND: &str = "OpenAPI specification not found";

/// Answers `GET <route>` with the bytes of the spec document.
///
/// The provider is consulted on every matching request, so a file that
/// appears or disappears while the server runs is picked up immediately.
/// Every other request passes through.
#[derive(Clone)]
pub struct SpecFileMiddleware {
    provider: Arc<dyn SpecProvider>,
    route: String,
}

impl SpecFileMiddleware {
    pub fn new(provider: Arc<dyn SpecProvider>) -> Self {
        Self {
            provider,
            route: DEFAULT_SPEC_ROUTE.to_string(),
        }
    }

    /// Serve `relative_path` below `root`.
    pub fn from_file(root: ResourceRoot, relative_path: impl Into<String>) -> Self {
        Self::new(Arc::new(FileSpecProvider::new(root, relative_path)))
    }

    #[must_use]
    pub fn with_route(mut self, route: &str) -> Self {
        self.route = normalize_mount(route);
        self
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Build the response for a matching request.
    #[must_use]
    pub fn respond(&self) -> ServeResponse {
        match self.provider.load() {
            Ok(doc) => {
                debug!(
                    source = %self.provider.describe(),
                    bytes = doc.bytes.len(),
                    "serving OpenAPI document"
                );
                ServeResponse::ok(doc.content_type, doc.bytes)
            }
            Err(e) if e.is_not_found() => {
                warn!(source = %self.provider.describe(), error = %e, "OpenAPI document not found");
                ServeResponse::not_found(SPEC_NOT_FOUND)
            }
            Err(e) => {
                error!(source = %self.provider.describe(), error = %e, "failed to read OpenAPI document");
                ServeResponse::new(
                    500,
                    crate::resources::TEXT_CONTENT_TYPE,
                    "Failed to read OpenAPI specification",
                )
            }
        }
    }
}

impl Middleware for SpecFileMiddleware {
    fn before(&self, req: &ParsedRequest) -> Option<ServeResponse> {
        if !req.is_read() || !matches_mount(&self.route, &req.path) {
            return None;
        }
        let res = self.respond();
        // HEAD goes out with Content-Length: 0; see ServeResponse::without_body.
        Some(if req.is_head() { res.without_body() } else { res })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::InMemorySpecProvider;
    use crate::resources::YAML_CONTENT_TYPE;
    use http::Method;
    use std::fs;
    use tempfile::TempDir;

    fn in_memory(content: &str) -> SpecFileMiddleware {
        SpecFileMiddleware::new(Arc::new(InMemorySpecProvider::new(content)))
    }

    #[test]
    fn test_serves_openapi_30() {
        let mw = in_memory("openapi: 3.0.0");
        let res = mw
            .before(&ParsedRequest::new(Method::GET, "/openapi.yml"))
            .unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(res.content_type, YAML_CONTENT_TYPE);
        assert!(res.body_str().contains("openapi: 3.0.0"));
    }

    #[test]
    fn test_empty_document_is_404() {
        let mw = in_memory("");
        let res = mw
            .before(&ParsedRequest::new(Method::GET, "/openapi.yml"))
            .unwrap();
        assert_eq!(res.status, 404);
        assert!(res.body_str().contains(SPEC_NOT_FOUND));
    }

    #[test]
    fn test_missing_file_is_404() {
        let dir = TempDir::new().unwrap();
        let mw = SpecFileMiddleware::from_file(ResourceRoot::new(dir.path()), "OpenAPI/missing.yml");
        let res = mw
            .before(&ParsedRequest::new(Method::GET, "/openapi.yml"))
            .unwrap();
        assert_eq!(res.status, 404);
    }

    #[test]
    fn test_file_bytes_are_exact() {
        let dir = TempDir::new().unwrap();
        let spec = "openapi: 3.1.0\ninfo:\n  title: Test API\n  version: 1.0.0\npaths: {}\n";
        fs::write(dir.path().join("openapi.yml"), spec).unwrap();
        let mw = SpecFileMiddleware::from_file(ResourceRoot::new(dir.path()), "openapi.yml");
        let res = mw
            .before(&ParsedRequest::new(Method::GET, "/openapi.yml?v=1"))
            .unwrap();
        assert_eq!(res.body, spec.as_bytes());
    }

    #[test]
    fn test_passes_through_other_requests() {
        let mw = in_memory("openapi: 3.0.0");
        assert!(mw.before(&ParsedRequest::new(Method::GET, "/docs")).is_none());
        assert!(mw
            .before(&ParsedRequest::new(Method::GET, "/openapi.yaml"))
            .is_none());
        assert!(mw
            .before(&ParsedRequest::new(Method::POST, "/openapi.yml"))
            .is_none());
    }

    #[test]
    fn test_head_has_no_body() {
        let mw = in_memory("openapi: 3.0.0");
        let res = mw
            .before(&ParsedRequest::new(Method::HEAD, "/openapi.yml"))
            .unwrap();
        assert_eq!(res.status, 200);
        assert!(res.body.is_empty());
    }

    #[test]
    fn test_custom_route() {
        let mw = in_memory("openapi: 3.0.0").with_route("spec/openapi.yaml");
        assert_eq!(mw.route(), "/spec/openapi.yaml");
        assert!(mw
            .before(&ParsedRequest::new(Method::GET, "/spec/openapi.yaml"))
            .is_some());
        assert!(mw
            .before(&ParsedRequest::new(Method::GET, "/openapi.yml"))
            .is_none());
    }

    #[test]
    fn test_repeated_requests_are_identical() {
        let mw = in_memory("openapi: 3.1.0");
        let req = ParsedRequest::new(Method::GET, "/openapi.yml");
        let first = mw.before(&req).unwrap();
        for _ in 0..5 {
            assert_eq!(mw.before(&req).unwrap(), first);
        }
    }
}
