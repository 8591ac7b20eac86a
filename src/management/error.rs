use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP client setup failed: {0}")]
    Client(String),
    #[error("Connection Refused: {url}")]
    ConnectionRefused { url: String },
    #[error("Timeout after {timeout_secs}s: {url}")]
    Timeout { url: String, timeout_secs: u64 },
    #[error("Request failed: {url}: {message}")]
    Request { url: String, message: String },
    #[error("{reason}: {url}")]
    BadRequest { url: String, reason: String },
    #[error("Not Found: {url}")]
    NotFound { url: String },
    #[error("Access Refused: {url}")]
    Unauthorized { url: String },
    #[error("{status_line}: {url}")]
    UnexpectedStatus { url: String, status_line: String },
    #[error("Malformed response from {url}: {message}")]
    MalformedBody { url: String, message: String },
    #[error("Response from {url} has no messages field")]
    MissingMessages { url: String },
}

impl FetchError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Client(_) => "FETCH_CLIENT_SETUP",
            Self::ConnectionRefused { .. } => "TRANSPORT_CONNECTION_REFUSED",
            Self::Timeout { .. } => "TRANSPORT_TIMEOUT",
            Self::Request { .. } => "TRANSPORT_REQUEST",
            Self::BadRequest { .. } => "PROTOCOL_BAD_REQUEST",
            Self::NotFound { .. } => "PROTOCOL_NOT_FOUND",
            Self::Unauthorized { .. } => "PROTOCOL_UNAUTHORIZED",
            Self::UnexpectedStatus { .. } => "PROTOCOL_UNEXPECTED_STATUS",
            Self::MalformedBody { .. } => "DATA_MALFORMED_BODY",
            Self::MissingMessages { .. } => "DATA_MISSING_MESSAGES",
        }
    }
}
