//! # CLI Module
//!
//! Command-line interface for the `openapi-serve` binary.
//!
//! ### `serve`
//!
//! Start the server:
//!
//! ```bash
//! openapi-serve serve --root Resources --docs-path /docs --addr 127.0.0.1:8080
//! ```
//!
//! ### `check`
//!
//! Resolve the configured resources and parse the spec; non-zero exit if the
//! spec is missing or is not an OpenAPI document. The server itself never
//! refuses to start over a missing file.
//!
//! ### `init`
//!
//! Scaffold `OpenAPI/openapi.yml` and `Views/redoc.html` below the resource
//! root. Existing files are kept unless `--force` is given.

mod commands;


pub use commands::{run_cli, scaffold_resources, Cli, Commands, ResourceArgs};
