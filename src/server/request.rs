use http::Method;
use may_minihttp::Request;
use tracing::debug;

/// Parsed HTTP request data used by `AppService` and the middleware chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// Raw query string, if any (without the leading `?`)
    pub query: Option<String>,
}

impl ParsedRequest {
    /// Build a request by hand; mostly useful in tests.
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = split_target(target);
        Self {
            method: method.to_string(),
            path,
            query,
        }
    }

    /// `true` for `GET` and `HEAD`, the only methods the served resources answer.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.method == Method::GET.as_str() || self.method == Method::HEAD.as_str()
    }

    #[must_use]
    pub fn is_head(&self) -> bool {
        self.method == Method::HEAD.as_str()
    }
}

/// Split a request target into path and query string.
///
/// ```
/// use openapi_serve::server::split_target;
///
/// assert_eq!(
///     split_target("/openapi.yml?v=2"),
///     ("/openapi.yml".to_string(), Some("v=2".to_string()))
/// );
/// assert_eq!(split_target("/docs"), ("/docs".to_string(), None));
/// ```
#[must_use]
pub fn split_target(target: &str) -> (String, Option<String>) {
    match target.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (target.to_string(), None),
    }
}

/// Extract method and target from a `may_minihttp::Request`.
///
/// Headers are not copied; nothing served here varies by them.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_ascii_uppercase();
    let (path, query) = split_target(req.path());

    debug!(method = %method, path = %path, header_count = req.headers().len(), "parsed request");

    ParsedRequest {
        method,
        path,
        query,
    }
}
