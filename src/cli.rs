use std::path::PathBuf;

use clap::Parser;

use crate::config::{CheckConfig, Config, ConfigError, load_config};

/// Averages a broker queue's depth over the last N runs and grades it
/// against warning/critical ranges.
#[derive(Debug, Parser)]
#[command(name = "queue_avg_check", version, about)]
pub struct Cli {
    /// Management API host
    #[arg(short = 'H', long)]
    pub host: Option<String>,
    /// Management API port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,
    #[arg(short = 'u', long)]
    pub username: Option<String>,
    #[arg(short = 'p', long)]
    pub password: Option<String>,
    #[arg(long)]
    pub vhost: Option<String>,
    /// Queue to check
    #[arg(short = 'q', long)]
    pub queue: Option<String>,
    /// Talk to the management API over https
    #[arg(long)]
    pub ssl: bool,
    /// Warning range for the average, e.g. `100` or `@10:20`
    #[arg(short = 'w', long, allow_hyphen_values = true)]
    pub warning: Option<String>,
    /// Critical range for the average
    #[arg(short = 'c', long, allow_hyphen_values = true)]
    pub critical: Option<String>,
    /// Number of samples to average over
    #[arg(short = 's', long)]
    pub samples: Option<usize>,
    /// Directory holding the sample history files
    #[arg(long = "tmpdir")]
    pub tmp_dir: Option<PathBuf>,
    /// Request timeout in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,
    /// Append performance data to the status line
    #[arg(long)]
    pub perfdata: bool,
    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// TOML file with `[connection]` and `[check]` defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command line values win over the config file, which wins over the
    /// built-in defaults.
    pub fn into_check_config(self) -> Result<CheckConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        self.apply(&mut config);
        config.into_check_config()
    }

    fn apply(self, config: &mut Config) {
        let connection = &mut config.connection;
        if let Some(host) = self.host {
            connection.host = host;
        }
        if let Some(port) = self.port {
            connection.port = port;
        }
        if let Some(username) = self.username {
            connection.username = username;
        }
        if let Some(password) = self.password {
            connection.password = password;
        }
        if let Some(vhost) = self.vhost {
            connection.vhost = vhost;
        }
        if let Some(timeout) = self.timeout {
            connection.timeout_secs = timeout;
        }
        connection.ssl |= self.ssl;

        let check = &mut config.check;
        if let Some(queue) = self.queue {
            check.queue = queue;
        }
        if self.warning.is_some() {
            check.warning = self.warning;
        }
        if self.critical.is_some() {
            check.critical = self.critical;
        }
        if let Some(samples) = self.samples {
            check.samples = samples;
        }
        if let Some(tmp_dir) = self.tmp_dir {
            check.tmp_dir = tmp_dir;
        }
        check.perfdata |= self.perfdata;
    }
}
