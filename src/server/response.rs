use crate::resources::{
    HTML_CONTENT_TYPE, JSON_CONTENT_TYPE, TEXT_CONTENT_TYPE, YAML_CONTENT_TYPE,
};
use http::StatusCode;
use may_minihttp::Response;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Response produced by a middleware or the fallback handler.
///
/// Content types are `&'static str` because `may_minihttp` only accepts
/// static header lines; every media type this crate emits is a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl ServeResponse {
    pub fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, content_type, body)
    }

    /// Plain-text 404 with a human readable diagnostic.
    pub fn not_found(message: &str) -> Self {
        Self::new(404, TEXT_CONTENT_TYPE, message.as_bytes().to_vec())
    }

    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, JSON_CONTENT_TYPE, body.to_string().into_bytes())
    }

    /// Same status and headers, empty body. Used to answer `HEAD`.
    ///
    /// `may_minihttp` derives `Content-Length` from the body it is handed, so
    /// a `HEAD` answer reports `Content-Length: 0` rather than the size the
    /// matching `GET` would send.
    #[must_use]
    pub fn without_body(mut self) -> Self {
        self.body.clear();
        self
    }

    #[must_use]
    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Reason phrase for the status line. `may_minihttp` only takes static strings.
fn status_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// Interned `Content-Type:` lines for media types outside the built-in set.
static EXTRA_CONTENT_TYPES: OnceLock<Mutex<HashMap<&'static str, &'static str>>> = OnceLock::new();

/// Static `Content-Type:` header line for `content_type`.
///
/// The media types this crate emits map to literals. Anything else a fallback
/// hands in is formatted once and kept for the life of the process; the set
/// is bounded by the distinct `&'static str` values the program uses.
fn content_type_header(content_type: &'static str) -> &'static str {
    match content_type {
        YAML_CONTENT_TYPE => "Content-Type: application/x-yaml",
        JSON_CONTENT_TYPE => "Content-Type: application/json",
        HTML_CONTENT_TYPE => "Content-Type: text/html; charset=utf-8",
        TEXT_CONTENT_TYPE => "Content-Type: text/plain; charset=utf-8",
        other => {
            let lines = EXTRA_CONTENT_TYPES.get_or_init(|| Mutex::new(HashMap::new()));
            let mut lines = lines.lock().unwrap_or_else(PoisonError::into_inner);
            let line = *lines.entry(other).or_insert_with(|| {
                let line: &'static str = Box::leak(format!("Content-Type: {other}").into_boxed_str());
                line
            });
            line
        }
    }
}

/// Copy a [`ServeResponse`] onto the `may_minihttp` response.
pub fn write_response(res: &mut Response, response: ServeResponse) {
    res.status_code(response.status as usize, status_reason(response.status));
    res.header(content_type_header(response.content_type));
    res.body_vec(response.body);
}
