use std::time::Duration;

use reqwest::{StatusCode, redirect::Policy};

use crate::config::CheckConfig;

use super::endpoint::queue_url;
use super::error::FetchError;
use super::model::{QueueStatus, error_reason};

pub trait QueueStatusProvider {
    async fn fetch(&self) -> Result<QueueStatus, FetchError>;
}

/// Issues a single authenticated GET against the management API. There is
/// no retry: the first failure is the answer.
pub struct HttpQueueStatusProvider {
    client: reqwest::Client,
    url: String,
    username: String,
    password: String,
    timeout_secs: u64,
}

impl HttpQueueStatusProvider {
    pub fn new(config: &CheckConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("queue_avg_check/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::none())
            .build()
            .map_err(|error| FetchError::Client(error.to_string()))?;

        Ok(Self {
            client,
            url: queue_url(config),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify_transport(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
                timeout_secs: self.timeout_secs,
            }
        } else if error.is_connect() {
            FetchError::ConnectionRefused {
                url: self.url.clone(),
            }
        } else {
            FetchError::Request {
                url: self.url.clone(),
                message: error.to_string(),
            }
        }
    }
}

impl QueueStatusProvider for HttpQueueStatusProvider {
    async fn fetch(&self) -> Result<QueueStatus, FetchError> {
        log::debug!("queue_status_request url={}", self.url);

        let response = self
            .client
            .get(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|error| self.classify_transport(error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| self.classify_transport(error))?;

        log::debug!(
            "queue_status_response url={} status={} bytes={}",
            self.url,
            status.as_u16(),
            body.len()
        );

        if status.is_success() {
            return QueueStatus::from_body(&self.url, &body);
        }

        let url = self.url.clone();
        Err(match status {
            StatusCode::BAD_REQUEST => FetchError::BadRequest {
                url,
                reason: error_reason(&body).unwrap_or_else(|| status.to_string()),
            },
            StatusCode::NOT_FOUND => FetchError::NotFound { url },
            StatusCode::UNAUTHORIZED => FetchError::Unauthorized { url },
            other => FetchError::UnexpectedStatus {
                url,
                status_line: other.to_string(),
            },
        })
    }
}

/// Provider that replays a fixed answer, for orchestrator tests.
#[cfg(test)]
pub struct ScriptedProvider {
    answer: Result<QueueStatus, FetchError>,
}

#[cfg(test)]
impl ScriptedProvider {
    pub fn returning(answer: Result<QueueStatus, FetchError>) -> Self {
        Self { answer }
    }
}

#[cfg(test)]
impl QueueStatusProvider for ScriptedProvider {
    async fn fetch(&self) -> Result<QueueStatus, FetchError> {
        self.answer.clone()
    }
}
