//! # Configuration
//!
//! [`ServeConfig`] says where the served resources live and where they are
//! mounted. It is built once at startup from, in increasing precedence:
//!
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. `OPENAPI_SERVE_*` environment variables
//! 4. command-line flags (applied by the CLI)
//!
//! ```yaml
//! resource_root: Resources
//! spec_path: OpenAPI/openapi.yml
//! template_path: Views/redoc.html
//! docs_path: /docs
//! spec_route: /openapi.yml
//! spec_url: /openapi.yml
//! addr: 0.0.0.0:8080
//! access_log: true
//! ```

use crate::error::ServeError;
use crate::middleware::{
    normalize_mount, DEFAULT_DOCS_PATH, DEFAULT_SPEC_ROUTE, DEFAULT_TEMPLATE_PATH,
};
use crate::resources::ResourceRoot;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_RESOURCE_ROOT: &str = "Resources";
pub const DEFAULT_SPEC_PATH: &str = "OpenAPI/openapi.yml";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Startup configuration for the spec file and docs page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    /// Base directory all resource paths are relative to
    pub resource_root: String,
    /// Spec document, relative to `resource_root`
    pub spec_path: String,
    /// ReDoc template, relative to `resource_root`
    pub template_path: String,
    /// Where the docs page is mounted
    pub docs_path: String,
    /// Route the spec document is served on
    pub spec_route: String,
    /// URL the viewer fetches the spec from; only substituted into the template
    pub spec_url: String,
    /// Listen address
    pub addr: String,
    /// Emit one log event per request
    pub access_log: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            resource_root: DEFAULT_RESOURCE_ROOT.to_string(),
            spec_path: DEFAULT_SPEC_PATH.to_string(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            spec_route: DEFAULT_SPEC_ROUTE.to_string(),
            spec_url: DEFAULT_SPEC_ROUTE.to_string(),
            addr: DEFAULT_ADDR.to_string(),
            access_log: true,
        }
    }
}

impl ServeConfig {
    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ServeError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ServeError::Config(e.to_string()))
    }

    /// Read and parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, ServeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServeError::from_io(e, path))?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml_str(&content)
    }

    /// Defaults, then `path` if given, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ServeError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `OPENAPI_SERVE_*` overrides looked up through `lookup`.
    ///
    /// Taking a lookup function keeps tests away from the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ServeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut String); 7] = [
            ("OPENAPI_SERVE_RESOURCE_ROOT", &mut self.resource_root),
            ("OPENAPI_SERVE_SPEC_PATH", &mut self.spec_path),
            ("OPENAPI_SERVE_TEMPLATE_PATH", &mut self.template_path),
            ("OPENAPI_SERVE_DOCS_PATH", &mut self.docs_path),
            ("OPENAPI_SERVE_SPEC_ROUTE", &mut self.spec_route),
            ("OPENAPI_SERVE_SPEC_URL", &mut self.spec_url),
            ("OPENAPI_SERVE_ADDR", &mut self.addr),
        ];
        for (key, field) in fields {
            if let Some(val) = lookup(key) {
                debug!(key, value = %val, "config override from environment");
                *field = val;
            }
        }
        if let Some(val) = lookup("OPENAPI_SERVE_ACCESS_LOG") {
            self.access_log = val.parse().map_err(|_| {
                ServeError::Config(format!(
                    "OPENAPI_SERVE_ACCESS_LOG must be true or false, got '{val}'"
                ))
            })?;
        }
        Ok(())
    }

    /// Reject configurations that can never serve anything.
    ///
    /// Missing files are not checked here; they are a per-request 404.
    /// `spec_url` is free-form (query strings and absolute URLs are fine);
    /// only the two mounted routes must be plain, distinct paths.
    pub fn validate(&self) -> Result<(), ServeError> {
        for (name, route) in [("docs_path", &self.docs_path), ("spec_route", &self.spec_route)] {
            if route.contains(&['?', '#'][..]) {
                return Err(ServeError::Config(format!(
                    "{name} '{route}' must be a plain path without query or fragment"
                )));
            }
        }
        if normalize_mount(&self.docs_path) == normalize_mount(&self.spec_route) {
            return Err(ServeError::Config(format!(
                "docs_path and spec_route both resolve to '{}'",
                normalize_mount(&self.spec_route)
            )));
        }
        let root = self.resource_root();
        root.resolve(&self.spec_path)?;
        root.resolve(&self.template_path)?;
        Ok(())
    }

    #[must_use]
    pub fn resource_root(&self) -> ResourceRoot {
        ResourceRoot::new(&self.resource_root)
    }
}
