use std::time::Duration;

use tracing::{info, info_span, warn};

use super::Middleware;
use crate::server::{ParsedRequest, ServeResponse};

/// Emits one access-log event per request.
///
/// Events are recorded inside a `request` span carrying method and path so
/// JSON output keeps them together with anything logged by the handlers.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn after(&self, req: &ParsedRequest, res: &ServeResponse, latency: Duration) {
        let span = info_span!("request", method = %req.method, path = %req.path);
        let _guard = span.enter();
        let latency_ms = latency.as_millis() as u64;
        if res.status >= 500 {
            warn!(status = res.status, bytes = res.body.len(), latency_ms, "request failed");
        } else {
            info!(status = res.status, bytes = res.body.len(), latency_ms, "request completed");
        }
    }
}
