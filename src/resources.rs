//! Resource root resolution.
//!
//! Both served resources (the spec document and the docs template) are
//! configured as paths relative to a single base directory. [`ResourceRoot`]
//! joins them onto that directory component by component and refuses
//! anything that would climb out of it.

use crate::error::ServeError;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Base directory for static/resource files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    base_dir: PathBuf,
}

impl ResourceRoot {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self {
            base_dir: base.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Join `relative` onto the root.
    ///
    /// Only normal components and `.` are accepted; `..`, a leading `/` or a
    /// Windows prefix yields [`ServeError::InvalidPath`].
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ServeError> {
        let mut pb = self.base_dir.clone();
        for comp in Path::new(relative).components() {
            match comp {
                Component::Normal(s) => pb.push(s),
                Component::CurDir => {}
                _ => {
                    return Err(ServeError::InvalidPath {
                        path: relative.to_string(),
                    })
                }
            }
        }
        Ok(pb)
    }

    /// Resolve and read a resource in one go.
    ///
    /// Existence is checked on every call; nothing is cached.
    pub fn read(&self, relative: &str) -> Result<Vec<u8>, ServeError> {
        let path = self.resolve(relative)?;
        if !path.is_file() {
            return Err(ServeError::ResourceNotFound { path });
        }
        fs::read(&path).map_err(|e| ServeError::from_io(e, path))
    }

    /// Like [`ResourceRoot::read`] but decoded as UTF-8 text.
    pub fn read_to_string(&self, relative: &str) -> Result<String, ServeError> {
        let path = self.resolve(relative)?;
        if !path.is_file() {
            return Err(ServeError::ResourceNotFound { path });
        }
        fs::read_to_string(&path).map_err(|e| ServeError::from_io(e, path))
    }
}

impl Default for ResourceRoot {
    fn default() -> Self {
        Self::new("Resources")
    }
}

/// Media type for a spec document based on its extension. YAML unless it is `.json`.
#[must_use]
pub fn spec_content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "json" => JSON_CONTENT_TYPE,
        _ => YAML_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prevents_traversal() {
        let root = ResourceRoot::new("Resources");
        assert!(root.resolve("../Cargo.toml").is_err());
        assert!(root.resolve("OpenAPI/../../Cargo.toml").is_err());
        assert!(root.resolve("/etc/passwd").is_err());
    }

    #[test]
    fn test_resolve_joins_normal_components() {
        let root = ResourceRoot::new("Resources");
        let path = root.resolve("./OpenAPI/openapi.yml").unwrap();
        assert_eq!(path, PathBuf::from("Resources/OpenAPI/openapi.yml"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let root = ResourceRoot::new(dir.path());
        let err = root.read("OpenAPI/missing.yml").unwrap_err();
        assert!(matches!(err, ServeError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("OpenAPI")).unwrap();
        let root = ResourceRoot::new(dir.path());
        assert!(root.read("OpenAPI").unwrap_err().is_not_found());
    }

    #[test]
    fn test_read_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hello.txt"), "Hello\n").unwrap();
        let root = ResourceRoot::new(dir.path());
        assert_eq!(root.read("hello.txt").unwrap(), b"Hello\n");
        assert_eq!(root.read_to_string("hello.txt").unwrap(), "Hello\n");
    }

    #[test]
    fn test_spec_content_type() {
        assert_eq!(spec_content_type(Path::new("openapi.yml")), YAML_CONTENT_TYPE);
        assert_eq!(spec_content_type(Path::new("openapi.YAML")), YAML_CONTENT_TYPE);
        assert_eq!(spec_content_type(Path::new("openapi.json")), JSON_CONTENT_TYPE);
        assert_eq!(spec_content_type(Path::new("openapi")), YAML_CONTENT_TYPE);
    }
}
