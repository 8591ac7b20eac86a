use crate::config::CheckConfig;

const FILE_PREFIX: &str = "queue_avg_check";
const FILE_EXTENSION: &str = "samples";

/// Identity of one monitored queue. Every distinct key owns its own
/// history file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryKey {
    pub host: String,
    pub port: u16,
    pub vhost: String,
    pub queue: String,
}

impl HistoryKey {
    pub fn from_config(config: &CheckConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            vhost: config.vhost.clone(),
            queue: config.queue.clone(),
        }
    }

    /// Components are percent-encoded and joined with `+`, which the
    /// encoding always escapes, so the mapping is injective.
    pub fn file_name(&self) -> String {
        format!(
            "{}+{}+{}+{}+{}.{}",
            FILE_PREFIX,
            urlencoding::encode(&self.host),
            self.port,
            urlencoding::encode(&self.vhost),
            urlencoding::encode(&self.queue),
            FILE_EXTENSION
        )
    }
}
