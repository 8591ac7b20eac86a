use crate::config::CheckConfig;

/// Builds the management API URL for the configured queue. The vhost and
/// queue are percent-encoded, so the default vhost `/` becomes `%2F`.
pub fn queue_url(config: &CheckConfig) -> String {
    let scheme = if config.ssl { "https" } else { "http" };
    let host = if config.host.contains(':') && !config.host.starts_with('[') {
        format!("[{}]", config.host)
    } else {
        config.host.clone()
    };

    format!(
        "{}://{}:{}/api/queues/{}/{}",
        scheme,
        host,
        config.port,
        urlencoding::encode(&config.vhost),
        urlencoding::encode(&config.queue)
    )
}
