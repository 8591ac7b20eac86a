use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Bad input: {value:?} is not a non-negative integer")]
    BadInput { value: String },
    #[error("Cannot read sample history {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Cannot write sample history {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("sample window must hold at least one sample")]
    InvalidWindow,
}
