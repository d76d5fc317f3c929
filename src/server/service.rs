use super::request::{parse_request, ParsedRequest};
use super::response::{write_response, ServeResponse};
use crate::config::ServeConfig;
use crate::middleware::{DocsPageMiddleware, Middleware, SpecFileMiddleware, TracingMiddleware};
use crate::docs::DocsTemplate;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Handler for requests no middleware answered.
pub type Fallback = Arc<dyn Fn(&ParsedRequest) -> ServeResponse + Send + Sync>;

/// `may_minihttp` service running a middleware chain in front of a fallback.
#[derive(Clone)]
pub struct AppService {
    middlewares: Vec<Arc<dyn Middleware>>,
    fallback: Fallback,
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}

impl AppService {
    /// Empty chain with [`default_fallback`] behind it.
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
            fallback: Arc::new(default_fallback),
        }
    }

    /// Mount the spec file and docs page described by `config`.
    pub fn from_config(config: &ServeConfig) -> Self {
        let root = config.resource_root();
        let mut service = Self::new();
        service.add_middleware(Arc::new(
            SpecFileMiddleware::from_file(root.clone(), config.spec_path.clone())
                .with_route(&config.spec_route),
        ));
        service.add_middleware(Arc::new(DocsPageMiddleware::new(
            DocsTemplate::new(root, config.template_path.clone()),
            &config.docs_path,
            config.spec_url.clone(),
        )));
        if config.access_log {
            service.add_middleware(Arc::new(TracingMiddleware));
        }
        info!(
            resource_root = %config.resource_root,
            spec_path = %config.spec_path,
            spec_route = %config.spec_route,
            spec_url = %config.spec_url,
            docs_path = %config.docs_path,
            "mounted OpenAPI document and docs page"
        );
        service
    }

    pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) {
        self.middlewares.push(middleware);
    }

    /// Replace the handler that answers requests passed through by every middleware.
    pub fn set_fallback<F>(&mut self, fallback: F)
    where
        F: Fn(&ParsedRequest) -> ServeResponse + Send + Sync + 'static,
    {
        self.fallback = Arc::new(fallback);
    }

    /// Run the chain for one request.
    #[must_use]
    pub fn handle(&self, req: &ParsedRequest) -> ServeResponse {
        let start = Instant::now();
        let response = self
            .middlewares
            .iter()
            .find_map(|mw| mw.before(req))
            .unwrap_or_else(|| (self.fallback)(req));
        let latency = start.elapsed();
        for mw in &self.middlewares {
            mw.after(req, &response, latency);
        }
        response
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
#[must_use]
pub fn health_endpoint() -> ServeResponse {
    ServeResponse::json(200, &json!({ "status": "ok" }))
}

/// `GET /health`, otherwise a JSON 404 naming the method and path.
#[must_use]
pub fn default_fallback(req: &ParsedRequest) -> ServeResponse {
    if req.method == "GET" && req.path == "/health" {
        return health_endpoint();
    }
    ServeResponse::json(
        404,
        &json!({ "error": "Not Found", "method": req.method, "path": req.path }),
    )
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let parsed = parse_request(req);
        let response = self.handle(&parsed);
        write_response(res, response);
        Ok(())
    }
}
