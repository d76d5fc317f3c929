//! Sources of OpenAPI document bytes.
//!
//! [`SpecFileMiddleware`](crate::middleware::SpecFileMiddleware) does not read
//! files itself; it asks a [`SpecProvider`]. Production code uses
//! [`FileSpecProvider`], tests usually reach for [`InMemorySpecProvider`].

use crate::error::ServeError;
use crate::resources::{spec_content_type, ResourceRoot, YAML_CONTENT_TYPE};
use std::path::PathBuf;
use tracing::debug;

/// A spec document ready to be written to the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Supplies the OpenAPI document on each request.
///
/// Implementations must not cache: a provider is asked again for every
/// request and the answer reflects the current state of its backing store.
pub trait SpecProvider: Send + Sync {
    /// Fetch the document, or [`ServeError::ResourceNotFound`] when there is none.
    fn load(&self) -> Result<SpecDocument, ServeError>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Reads the document from a file below a [`ResourceRoot`]
#[derive(Debug, Clone)]
pub struct FileSpecProvider {
    root: ResourceRoot,
    relative_path: String,
}

impl FileSpecProvider {
    pub fn new(root: ResourceRoot, relative_path: impl Into<String>) -> Self {
        Self {
            root,
            relative_path: relative_path.into(),
        }
    }

    /// Absolute-ish location of the file, or `InvalidPath` if it escapes the root.
    pub fn resolved_path(&self) -> Result<PathBuf, ServeError> {
        self.root.resolve(&self.relative_path)
    }
}

impl SpecProvider for FileSpecProvider {
    fn load(&self) -> Result<SpecDocument, ServeError> {
        let path = self.resolved_path()?;
        let bytes = self.root.read(&self.relative_path)?;
        if bytes.is_empty() {
            debug!(path = %path.display(), "spec file is empty");
            return Err(ServeError::ResourceNotFound { path });
        }
        Ok(SpecDocument {
            bytes,
            content_type: spec_content_type(&path),
        })
    }

    fn describe(&self) -> String {
        self.root
            .base_dir()
            .join(&self.relative_path)
            .display()
            .to_string()
    }
}

/// Fixed document held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySpecProvider {
    content: String,
    content_type: Option<&'static str>,
}

impl InMemorySpecProvider {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
        }
    }

    /// Override the media type (defaults to YAML).
    #[must_use]
    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }
}

impl SpecProvider for InMemorySpecProvider {
    fn load(&self) -> Result<SpecDocument, ServeError> {
        if self.content.is_empty() {
            return Err(ServeError::ResourceNotFound {
                path: PathBuf::from("<memory>"),
            });
        }
        Ok(SpecDocument {
            bytes: self.content.clone().into_bytes(),
            content_type: self.content_type.unwrap_or(YAML_CONTENT_TYPE),
        })
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
