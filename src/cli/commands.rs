use crate::config::ServeConfig;
use crate::docs::REDOC_TEMPLATE;
use crate::inspect::inspect_spec;
use crate::otel;
use crate::runtime_config::RuntimeConfig;
use crate::server::{AppService, HttpServer};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Starter document written by `init`.
const STARTER_SPEC: &str = "openapi: 3.1.0
info:
  title: My API
  version: 1.0.0
paths: {}
";

/// Command-line interface for openapi-serve
#[derive(Parser)]
#[command(name = "openapi-serve")]
#[command(about = "Serve an OpenAPI document and its ReDoc page", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that needs the resource layout
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// YAML configuration file
    #[arg(short, long, env = "OPENAPI_SERVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base directory for resource files
    #[arg(short, long)]
    pub root: Option<String>,

    /// Spec document, relative to the resource root
    #[arg(long)]
    pub spec: Option<String>,

    /// ReDoc template, relative to the resource root
    #[arg(long)]
    pub template: Option<String>,
}

impl ResourceArgs {
    /// Config file and environment, then these flags on top.
    pub fn load_config(&self) -> Result<ServeConfig> {
        let mut config = ServeConfig::load(self.config.as_deref())
            .with_context(|| match &self.config {
                Some(p) => format!("failed to load config from {}", p.display()),
                None => "failed to load config from environment".to_string(),
            })?;
        if let Some(root) = &self.root {
            config.resource_root.clone_from(root);
        }
        if let Some(spec) = &self.spec {
            config.spec_path.clone_from(spec);
        }
        if let Some(template) = &self.template {
            config.template_path.clone_from(template);
        }
        Ok(config)
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the spec document and the docs page
    Serve {
        #[command(flatten)]
        resources: ResourceArgs,

        /// Mount path of the docs page
        #[arg(long)]
        docs_path: Option<String>,

        /// Route the spec document is served on
        #[arg(long)]
        spec_route: Option<String>,

        /// URL the viewer fetches the spec from; any URL, only put into the page
        #[arg(long)]
        spec_url: Option<String>,

        /// Listen address
        #[arg(long)]
        addr: Option<String>,

        /// Log level (trace, debug, info, warn, error); overrides OPENAPI_SERVE_LOG_LEVEL
        #[arg(long)]
        log_level: Option<String>,
    },
    /// Check that the configured resources exist and the spec parses
    Check {
        #[command(flatten)]
        resources: ResourceArgs,
    },
    /// Write a starter spec and ReDoc template below the resource root
    Init {
        #[command(flatten)]
        resources: ResourceArgs,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            resources,
            docs_path,
            spec_route,
            spec_url,
            addr,
            log_level,
        } => {
            otel::init_logging(log_level.as_deref())?;
            RuntimeConfig::from_env().apply();

            let mut config = resources.load_config()?;
            if let Some(docs_path) = docs_path {
                config.docs_path = docs_path;
            }
            if let Some(spec_route) = spec_route {
                config.spec_route = spec_route;
            }
            if let Some(spec_url) = spec_url {
                config.spec_url = spec_url;
            }
            if let Some(addr) = addr {
                config.addr = addr;
            }
            config.validate().context("invalid configuration")?;

            let service = AppService::from_config(&config);
            let handle = HttpServer(service)
                .start(config.addr.as_str())
                .with_context(|| format!("failed to bind {}", config.addr))?;
            info!(addr = %handle.addr(), docs = %config.docs_path, "openapi-serve started");
            handle
                .join()
                .map_err(|_| anyhow!("server coroutine panicked"))?;
            Ok(())
        }
        Commands::Check { resources } => {
            let config = resources.load_config()?;
            let report = check_resources(&config)?;
            print!("{report}");
            Ok(())
        }
        Commands::Init { resources, force } => {
            let config = resources.load_config()?;
            for (path, written) in scaffold_resources(&config, force)? {
                if written {
                    println!("wrote {}", path.display());
                } else {
                    println!("kept  {} (use --force to overwrite)", path.display());
                }
            }
            Ok(())
        }
    }
}

/// Resolve both resources and parse the spec.
///
/// A missing template is reported but is not fatal; a missing or unparsable
/// spec is.
pub(crate) fn check_resources(config: &ServeConfig) -> Result<String> {
    config.validate().context("invalid configuration")?;
    let root = config.resource_root();
    let mut report = String::new();

    let spec_path = root.resolve(&config.spec_path)?;
    let content = root
        .read_to_string(&config.spec_path)
        .with_context(|| format!("spec document {} is not readable", spec_path.display()))?;
    let summary = inspect_spec(&spec_path, &content)?;
    report.push_str(&format!(
        "spec      {} (OpenAPI {}, \"{}\" v{}, {} paths) -> GET {}\n",
        spec_path.display(),
        summary.openapi,
        summary.title,
        summary.version,
        summary.path_count,
        config.spec_route
    ));

    let template_path = root.resolve(&config.template_path)?;
    if template_path.is_file() {
        report.push_str(&format!(
            "template  {} -> GET {}\n",
            template_path.display(),
            config.docs_path
        ));
    } else {
        report.push_str(&format!(
            "template  {} MISSING, GET {} will answer 404\n",
            template_path.display(),
            config.docs_path
        ));
    }
    Ok(report)
}

/// Write the starter spec and template. Returns each path and whether it was written.
pub fn scaffold_resources(config: &ServeConfig, force: bool) -> Result<Vec<(PathBuf, bool)>> {
    config.validate().context("invalid configuration")?;
    let root = config.resource_root();
    let mut out = Vec::new();
    for (relative, content) in [
        (config.spec_path.as_str(), STARTER_SPEC),
        (config.template_path.as_str(), REDOC_TEMPLATE),
    ] {
        let path = root.resolve(relative)?;
        let written = write_if_absent(&path, content, force)?;
        out.push((path, written));
    }
    Ok(out)
}

fn write_if_absent(path: &Path, content: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if path.is_dir() {
        bail!("{} is a directory", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
