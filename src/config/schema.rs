use std::path::PathBuf;

use serde::Deserialize;

use crate::threshold::Thresholds;

use super::defaults::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionSection,
    #[serde(default)]
    pub check: CheckSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_vhost")]
    pub vhost: String,
    #[serde(default)]
    pub ssl: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckSection {
    #[serde(default)]
    pub queue: String,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub critical: Option<String>,
    #[serde(default = "default_samples", alias = "window_size")]
    pub samples: usize,
    #[serde(default = "default_tmp_dir", alias = "tmpdir")]
    pub tmp_dir: PathBuf,
    #[serde(default)]
    pub perfdata: bool,
}

/// Validated settings for a single check run. Built once at startup and
/// handed to the orchestrator by reference.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub vhost: String,
    pub queue: String,
    pub ssl: bool,
    pub thresholds: Thresholds,
    pub samples: usize,
    pub tmp_dir: PathBuf,
    pub timeout_secs: u64,
    pub perfdata: bool,
}

#[cfg(test)]
impl CheckConfig {
    pub(crate) fn for_queue(queue: &str) -> Self {
        let mut config = Config::default();
        config.check.queue = queue.to_string();
        config
            .into_check_config()
            .expect("default config should be valid")
    }
}
