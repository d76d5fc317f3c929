//! # Runtime Configuration
//!
//! Coroutine runtime settings read from the environment.
//!
//! ### `OPENAPI_SERVE_STACK_SIZE`
//!
//! Stack size for `may` coroutines. Accepts decimal (`16384`) or hexadecimal
//! (`0x4000`). Default: `0x4000` (16 KB). Serving a file and rendering one
//! template needs very little stack; raise it only for custom middleware.

use std::env;

pub const DEFAULT_STACK_SIZE: usize = 0x4000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(env::var("OPENAPI_SERVE_STACK_SIZE").ok().as_deref())
    }

    fn from_value(val: Option<&str>) -> Self {
        let stack_size = match val {
            Some(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(DEFAULT_STACK_SIZE)
                } else {
                    val.parse().unwrap_or(DEFAULT_STACK_SIZE)
                }
            }
            None => DEFAULT_STACK_SIZE,
        };
        RuntimeConfig { stack_size }
    }

    /// Push the settings into the `may` runtime. Call before starting a server.
    pub fn apply(&self) {
        may::config().set_stack_size(self.stack_size);
    }
}
