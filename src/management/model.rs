use serde_json::Value;

use super::error::FetchError;

/// Fields of the management API queue object this check cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStatus {
    pub name: Option<String>,
    /// Textual form of the `messages` field; validated by the averager.
    pub messages: String,
    pub messages_ready: Option<u64>,
    pub messages_unacknowledged: Option<u64>,
    pub consumers: Option<u64>,
}

impl QueueStatus {
    pub fn from_body(url: &str, body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body).map_err(|error| FetchError::MalformedBody {
            url: url.to_string(),
            message: error.to_string(),
        })?;

        let messages = match value.get("messages") {
            None | Some(Value::Null) => {
                return Err(FetchError::MissingMessages {
                    url: url.to_string(),
                });
            }
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };

        Ok(Self {
            name: value.get("name").and_then(Value::as_str).map(str::to_string),
            messages,
            messages_ready: value.get("messages_ready").and_then(Value::as_u64),
            messages_unacknowledged: value
                .get("messages_unacknowledged")
                .and_then(Value::as_u64),
            consumers: value.get("consumers").and_then(Value::as_u64),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_messages(messages: &str) -> Self {
        Self {
            name: None,
            messages: messages.to_string(),
            messages_ready: None,
            messages_unacknowledged: None,
            consumers: None,
        }
    }
}

/// Pulls the `reason` string out of a management API error body.
pub(super) fn error_reason(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("reason")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .map(str::to_string)
}
