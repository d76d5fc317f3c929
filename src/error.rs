use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while resolving or rendering served resources
///
/// Only [`ServeError::ResourceNotFound`] is meaningful to HTTP clients; the
/// middleware maps it to a 404. Everything else surfaces as a 500.
#[derive(Debug)]
pub enum ServeError {
    /// The spec file or template does not exist (or is empty)
    ResourceNotFound {
        /// Path that was looked up
        path: PathBuf,
    },
    /// A relative resource path tried to leave the resource root
    InvalidPath {
        /// The offending path as configured
        path: String,
    },
    /// The documentation template could not be parsed or rendered
    Template(String),
    /// Configuration could not be loaded or is inconsistent
    Config(String),
    /// Any other I/O failure while reading a resource
    Io(io::Error),
}

impl ServeError {
    /// `true` when the error should be reported as a 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServeError::ResourceNotFound { .. } | ServeError::InvalidPath { .. }
        )
    }

    /// Convert an I/O error on `path`, folding `NotFound` into [`ServeError::ResourceNotFound`].
    pub(crate) fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ServeError::ResourceNotFound { path: path.into() }
        } else {
            ServeError::Io(err)
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::ResourceNotFound { path } => {
                write!(f, "resource not found: {}", path.display())
            }
            ServeError::InvalidPath { path } => {
                write!(
                    f,
                    "invalid resource path '{path}': must stay inside the resource root"
                )
            }
            ServeError::Template(msg) => write!(f, "template error: {msg}"),
            ServeError::Config(msg) => write!(f, "configuration error: {msg}"),
            ServeError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<minijinja::Error> for ServeError {
    fn from(err: minijinja::Error) -> Self {
        ServeError::Template(err.to_string())
    }
}
