use super::error::HistoryError;
use super::key::HistoryKey;
use super::store::HistoryStore;
use super::window::SampleHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Average {
    pub mean: u64,
    pub samples: usize,
}

/// Accepts a non-negative integer of any length. Signs, decimals and
/// surrounding text are rejected.
pub fn parse_sample(raw: &str) -> Result<u64, HistoryError> {
    let value = raw.trim();
    let bad_input = || HistoryError::BadInput {
        value: raw.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(bad_input());
    }
    value.parse::<u64>().map_err(|_| bad_input())
}

/// Records `raw_sample` as the newest entry of the history stored under
/// `key`, keeps at most `window_size` entries and returns their mean.
///
/// The store is not touched when the window size or the sample is invalid.
pub fn update<S>(
    store: &S,
    key: &HistoryKey,
    window_size: usize,
    raw_sample: &str,
) -> Result<Average, HistoryError>
where
    S: HistoryStore + ?Sized,
{
    if window_size == 0 {
        return Err(HistoryError::InvalidWindow);
    }
    let sample = parse_sample(raw_sample)?;

    let mut history = SampleHistory::from_stored(window_size, store.load(key)?);
    history.push(sample);
    store.save(key, &history.to_vec())?;

    let mean = history.mean().ok_or(HistoryError::InvalidWindow)?;
    Ok(Average {
        mean,
        samples: history.len(),
    })
}
