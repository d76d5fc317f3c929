//! # Middleware Module
//!
//! Request pipeline steps for [`AppService`](crate::server::AppService).
//!
//! - [`SpecFileMiddleware`] serves the OpenAPI document (`GET /openapi.yml`)
//! - [`DocsPageMiddleware`] renders the ReDoc page (`GET /docs`)
//! - [`TracingMiddleware`] writes one access-log event per request
//!
//! Each middleware either answers a request from [`Middleware::before`] or
//! passes it through by returning `None`.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use openapi_serve::middleware::{DocsPageMiddleware, SpecFileMiddleware, TracingMiddleware};
//! use openapi_serve::resources::ResourceRoot;
//! use openapi_serve::server::AppService;
//!
//! let root = ResourceRoot::new("Resources");
//! let mut service = AppService::new();
//! service.add_middleware(Arc::new(SpecFileMiddleware::from_file(root.clone(), "OpenAPI/openapi.yml")));
//! service.add_middleware(Arc::new(DocsPageMiddleware::with_defaults(root)));
//! service.add_middleware(Arc::new(TracingMiddleware));
//! ```

mod core;
mod docs_page;
mod spec_file;
mod tracing;

pub use self::core::{normalize_mount, Middleware};
pub use docs_page::{
    DocsPageMiddleware, DEFAULT_DOCS_PATH, DEFAULT_TEMPLATE_PATH, TEMPLATE_NOT_FOUND,
};
pub use spec_file::{SpecFileMiddleware, DEFAULT_SPEC_ROUTE, SPEC_NOT_FOUND};
pub use self::tracing::TracingMiddleware;
