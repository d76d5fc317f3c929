pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_request, split_target, ParsedRequest};
pub use response::{write_response, ServeResponse};
pub use service::{default_fallback, health_endpoint, AppService, Fallback};
