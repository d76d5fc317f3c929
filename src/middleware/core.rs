use std::time::Duration;

use crate::server::{ParsedRequest, ServeResponse};

/// A step in the `AppService` request pipeline.
///
/// `before` runs in registration order; the first middleware that returns a
/// response answers the request and the rest of the chain is skipped.
/// Returning `None` passes the request through untouched. `after` runs for
/// every middleware once the response is known.
pub trait Middleware: Send + Sync {
    fn before(&self, _req: &ParsedRequest) -> Option<ServeResponse> {
        None
    }
    fn after(&self, _req: &ParsedRequest, _res: &ServeResponse, _latency: Duration) {}
}

/// Normalise a mount path: leading `/`, no trailing `/` (except the root).
#[must_use]
pub fn normalize_mount(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// `true` if `request_path` addresses `mount` (a trailing `/` is tolerated).
pub(crate) fn matches_mount(mount: &str, request_path: &str) -> bool {
    if mount == "/" {
        return request_path == "/";
    }
    request_path == mount || request_path.strip_suffix('/') == Some(mount)
}
