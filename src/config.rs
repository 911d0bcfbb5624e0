//! Server configuration.
//!
//! Loaded from an optional YAML file named by `FERROCAT_CONFIG`, then
//! overridden by `LISTEN` and `STATIC_ROOT`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::http::parser::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_HEAD_BYTES, ParseLimits};

pub const CONFIG_ENV: &str = "FERROCAT_CONFIG";
pub const LISTEN_ENV: &str = "LISTEN";
pub const STATIC_ROOT_ENV: &str = "STATIC_ROOT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Upper bound on each socket read. Unset means a silent client holds its
    /// task forever.
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
    /// Largest accepted start line plus headers.
    #[serde(default = "default_max_head_bytes")]
    pub max_head_bytes: usize,
    /// Largest accepted Content-Length.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            read_timeout_secs: None,
            max_head_bytes: default_max_head_bytes(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }

    pub fn parse_limits(&self) -> ParseLimits {
        ParseLimits {
            max_head_bytes: self.max_head_bytes,
            max_body_bytes: self.max_body_bytes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_static_root")]
    pub root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_static_root(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_head_bytes() -> usize {
    DEFAULT_MAX_HEAD_BYTES
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_static_root() -> PathBuf {
    PathBuf::from("static")
}

impl Config {
    /// Loads from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Loads using `var` to look up environment variables.
    pub fn load_from(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = match var(CONFIG_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(listen_addr) = var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }
        if let Some(root) = var(STATIC_ROOT_ENV) {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
