use std::path::PathBuf;

use super::schema::{CheckSection, ConnectionSection};

pub(super) fn default_host() -> String {
    "localhost".to_string()
}

pub(super) fn default_port() -> u16 {
    15672
}

pub(super) fn default_username() -> String {
    "guest".to_string()
}

pub(super) fn default_password() -> String {
    "guest".to_string()
}

pub(super) fn default_vhost() -> String {
    "/".to_string()
}

pub(super) fn default_timeout_secs() -> u64 {
    15
}

pub(super) fn default_samples() -> usize {
    3
}

pub(super) fn default_tmp_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

impl Default for ConnectionSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: default_username(),
            password: default_password(),
            vhost: default_vhost(),
            ssl: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            queue: String::new(),
            warning: None,
            critical: None,
            samples: default_samples(),
            tmp_dir: default_tmp_dir(),
            perfdata: false,
        }
    }
}
