use std::path::Path;

use super::{schema::Config, validate::ConfigError};

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_str.clone(),
        source,
    })?;
    let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::load_config;
    use crate::config::ConfigError;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("check.toml");
        fs::write(&path, "[check]\nqueue = \"orders\"\nwarning = \"100\"\n")
            .expect("write config");

        let config = load_config(&path).expect("config should parse");
        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.connection.port, 15672);
        assert_eq!(config.connection.vhost, "/");
        assert_eq!(config.check.queue, "orders");
        assert_eq!(config.check.warning.as_deref(), Some("100"));
        assert_eq!(config.check.critical, None);
        assert_eq!(config.check.samples, 3);
    }

    #[test]
    fn reports_path_on_read_and_parse_failures() {
        let dir = tempfile::tempdir().expect("temp dir");

        let missing = dir.path().join("absent.toml");
        let error = load_config(&missing).expect_err("missing file should fail");
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().contains("absent.toml"));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[connection\nhost = ").expect("write config");
        let error = load_config(&broken).expect_err("broken file should fail");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
