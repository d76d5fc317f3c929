//! Lightweight inspection of an OpenAPI document.
//!
//! Serving never parses the document; this is only used by `openapi-serve
//! check` to tell an operator whether what is on disk is actually a spec.

use anyhow::{Context, Result};
use oas3::OpenApiV3Spec;
use std::path::Path;

/// Headline facts about a parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSummary {
    pub openapi: String,
    pub title: String,
    pub version: String,
    pub path_count: usize,
}

/// Parse `content` as YAML, or JSON when `path` ends in `.json`.
pub fn inspect_spec(path: &Path, content: &str) -> Result<SpecSummary> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let spec: OpenApiV3Spec = if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("{} is not a valid OpenAPI JSON document", path.display()))?
    } else {
        serde_yaml::from_str(content)
            .with_context(|| format!("{} is not a valid OpenAPI YAML document", path.display()))?
    };

    Ok(SpecSummary {
        openapi: spec.openapi.clone(),
        title: spec.info.title.clone(),
        version: spec.info.version.clone(),
        path_count: spec.paths.as_ref().map_or(0, |p| p.len()),
    })
}
