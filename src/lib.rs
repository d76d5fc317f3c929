//! # openapi_serve
//!
//! Serve a static OpenAPI document and a ReDoc documentation page from a
//! `may_minihttp` service.
//!
//! ## Overview
//!
//! Two middleware do all the work:
//!
//! - **[`SpecFileMiddleware`]** answers `GET /openapi.yml` with the bytes of
//!   a file below the resource root, or a plain-text 404 if it is missing.
//! - **[`DocsPageMiddleware`]** answers `GET /docs` with an HTML page whose
//!   `<redoc spec-url="...">` element points at the spec URL.
//!
//! Every other request passes through to the rest of the pipeline.
//! Resources are looked up on every request; nothing is cached, so replacing
//! the file on disk takes effect immediately.
//!
//! ## Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as HttpServer<br/>(may_minihttp)
//!     participant Spec as SpecFileMiddleware
//!     participant Docs as DocsPageMiddleware
//!     participant Fallback
//!
//!     Client->>Server: GET /docs
//!     Server->>Spec: before(req)
//!     Spec-->>Server: None (pass through)
//!     Server->>Docs: before(req)
//!     Docs->>Docs: read Views/redoc.html<br/>render spec_url
//!     alt template missing
//!         Docs-->>Client: 404 Documentation template not found
//!     end
//!     Docs-->>Client: 200 text/html
//!
//!     Client->>Server: GET /pets
//!     Server->>Spec: before(req)
//!     Server->>Docs: before(req)
//!     Server->>Fallback: handle(req)
//!     Fallback-->>Client: 404 JSON
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use openapi_serve::config::ServeConfig;
//! use openapi_serve::server::{AppService, HttpServer};
//!
//! let config = ServeConfig::default();
//! let service = AppService::from_config(&config);
//! let handle = HttpServer(service).start("127.0.0.1:8080").expect("bind");
//! handle.join().ok();
//! ```
//!
//! ## Resource Layout
//!
//! ```text
//! Resources/
//! ├── OpenAPI/
//! │   └── openapi.yml      # served verbatim at /openapi.yml
//! └── Views/
//!     └── redoc.html       # rendered at /docs
//! ```
//!
//! `openapi-serve init` writes both files.
//!
//! ## Runtime Considerations
//!
//! The server runs on the `may` coroutine runtime, not tokio. Each request
//! does one blocking file read, which `may` handles without a thread pool.
//! Stack size is configurable via `OPENAPI_SERVE_STACK_SIZE`.

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod inspect;
pub mod middleware;
pub mod otel;
pub mod provider;
pub mod resources;
pub mod runtime_config;
pub mod server;

pub use config::ServeConfig;
pub use error::ServeError;
pub use middleware::{DocsPageMiddleware, Middleware, SpecFileMiddleware};
pub use provider::{FileSpecProvider, InMemorySpecProvider, SpecProvider};
pub use resources::ResourceRoot;
