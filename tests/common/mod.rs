#![allow(dead_code)]

pub mod resources {
    use std::fs;
    use tempfile::TempDir;

    pub const SPEC_31: &str = "openapi: 3.1.0
info:
  title: Test API
  version: 1.0.0
paths: {}
";

    pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>API Documentation</title>
</head>
<body>
    <redoc spec-url="{{ spec_url }}"></redoc>
</body>
</html>
"#;

    /// Scratch resource root with `OpenAPI/` and `Views/` created.
    pub fn resource_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("OpenAPI")).unwrap();
        fs::create_dir_all(dir.path().join("Views")).unwrap();
        dir
    }

    /// Resource root holding both the spec and the template.
    pub fn full_resource_root() -> TempDir {
        let dir = resource_root();
        fs::write(dir.path().join("OpenAPI/openapi.yml"), SPEC_31).unwrap();
        fs::write(dir.path().join("Views/redoc.html"), TEMPLATE).unwrap();
        dir
    }
}

pub mod test_server {
    use openapi_serve::config::ServeConfig;
    use openapi_serve::server::{AppService, HttpServer, ServerHandle};
    use std::net::{SocketAddr, TcpListener};
    use std::sync::Once;

    /// Ensures May coroutines and test logging are configured only once
    static INIT: Once = Once::new();

    pub fn setup_runtime() {
        INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter("openapi_serve=debug")
                .try_init();
        });
    }

    /// Server bound to an ephemeral port, stopped on drop
    pub struct TestServer {
        handle: Option<ServerHandle>,
        pub addr: SocketAddr,
    }

    impl TestServer {
        pub fn start(service: AppService) -> Self {
            setup_runtime();
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let handle = HttpServer(service).start(addr).unwrap();
            handle.wait_ready().unwrap();
            Self {
                handle: Some(handle),
                addr,
            }
        }

        pub fn from_config(config: &ServeConfig) -> Self {
            Self::start(AppService::from_config(config))
        }

        pub fn get(&self, path: &str) -> super::http::HttpReply {
            self.send(&format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"))
        }

        pub fn send(&self, raw: &str) -> super::http::HttpReply {
            super::http::parse_reply(&super::http::send_request(&self.addr, raw))
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            if let Some(handle) = self.handle.take() {
                handle.stop();
            }
        }
    }
}

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HttpReply {
        pub status: u16,
        pub reason: String,
        pub content_type: String,
        pub content_length: Option<usize>,
        pub body: String,
    }

    pub fn send_request(addr: &SocketAddr, req: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_millis(200)))
            .unwrap();
        let mut buf = Vec::new();
        loop {
            let mut tmp = [0u8; 1024];
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    break
                }
                Err(e) => panic!("read error: {e:?}"),
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    pub fn parse_reply(resp: &str) -> HttpReply {
        let (headers, body) = resp.split_once("\r\n\r\n").unwrap_or((resp, ""));
        let mut status = 0;
        let mut reason = String::new();
        let mut content_type = String::new();
        let mut content_length = None;
        for line in headers.lines() {
            if let Some(rest) = line.strip_prefix("HTTP/1.1 ") {
                let (code, phrase) = rest.split_once(' ').unwrap_or((rest, ""));
                status = code.parse().unwrap();
                reason = phrase.to_string();
            } else if let Some((name, val)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-type") {
                    content_type = val.trim().to_string();
                } else if name.eq_ignore_ascii_case("content-length") {
                    content_length = val.trim().parse().ok();
                }
            }
        }
        HttpReply {
            status,
            reason,
            content_type,
            content_length,
            body: body.to_string(),
        }
    }
}
