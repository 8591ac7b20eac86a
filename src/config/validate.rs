use thiserror::Error;

use crate::threshold::{Range, ThresholdError, Thresholds};

use super::schema::{CheckConfig, Config};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
    #[error("invalid {field} threshold: {source}")]
    Threshold {
        field: &'static str,
        source: ThresholdError,
    },
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connection.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "host must not be empty".to_string(),
            ));
        }
        if self.connection.port == 0 {
            return Err(ConfigError::Validation(
                "port must be greater than 0".to_string(),
            ));
        }
        if self.connection.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout must be greater than 0".to_string(),
            ));
        }
        if self.check.queue.trim().is_empty() {
            return Err(ConfigError::Validation(
                "queue must not be empty".to_string(),
            ));
        }
        if self.check.samples == 0 {
            return Err(ConfigError::Validation(
                "samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_check_config(self) -> Result<CheckConfig, ConfigError> {
        self.validate()?;

        let warning = parse_threshold("warning", self.check.warning.as_deref())?;
        let critical = parse_threshold("critical", self.check.critical.as_deref())?;

        Ok(CheckConfig {
            host: self.connection.host,
            port: self.connection.port,
            username: self.connection.username,
            password: self.connection.password,
            vhost: self.connection.vhost,
            queue: self.check.queue,
            ssl: self.connection.ssl,
            thresholds: Thresholds { warning, critical },
            samples: self.check.samples,
            tmp_dir: self.check.tmp_dir,
            timeout_secs: self.connection.timeout_secs,
            perfdata: self.check.perfdata,
        })
    }
}

fn parse_threshold(
    field: &'static str,
    expression: Option<&str>,
) -> Result<Option<Range>, ConfigError> {
    expression
        .map(|text| Range::parse(text).map_err(|source| ConfigError::Threshold { field, source }))
        .transpose()
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigError};

    fn config_for(queue: &str) -> Config {
        let mut config = Config::default();
        config.check.queue = queue.to_string();
        config
    }

    #[test]
    fn builds_check_config_with_parsed_thresholds() {
        let mut config = config_for("orders");
        config.check.warning = Some("100".to_string());
        config.check.critical = Some("@500:1000".to_string());

        let check = config.into_check_config().expect("config should be valid");
        assert_eq!(check.queue, "orders");
        assert_eq!(check.samples, 3);
        let warning = check.thresholds.warning.expect("warning threshold");
        assert!(warning.matches(101.0));
        assert!(!warning.matches(100.0));
        let critical = check.thresholds.critical.expect("critical threshold");
        assert!(critical.matches(750.0));
    }

    #[test]
    fn rejects_empty_queue_and_zero_window() {
        let error = config_for("  ")
            .into_check_config()
            .expect_err("empty queue should fail");
        assert!(matches!(error, ConfigError::Validation(_)));

        let mut zero_window = config_for("orders");
        zero_window.check.samples = 0;
        let error = zero_window
            .into_check_config()
            .expect_err("zero window should fail");
        assert!(error.to_string().contains("samples"));
    }

    #[test]
    fn names_the_offending_threshold() {
        let mut config = config_for("orders");
        config.check.critical = Some("20:10".to_string());

        let error = config
            .into_check_config()
            .expect_err("inverted range should fail");
        assert!(matches!(
            error,
            ConfigError::Threshold {
                field: "critical",
                ..
            }
        ));
    }
}
