use crate::config::CheckConfig;
use crate::history::{self, HistoryError, HistoryKey, HistoryStore};
use crate::management::{QueueStatusProvider, queue_url};
use crate::status::{CheckResult, Status};

use super::report::{average_message, perfdata};

/// One check run: fetch the queue depth, fold it into the stored window and
/// grade the window average. Every failure ends the run immediately.
pub async fn run_check<P, S>(config: &CheckConfig, provider: &P, store: &S) -> CheckResult
where
    P: QueueStatusProvider,
    S: HistoryStore + ?Sized,
{
    let url = queue_url(config);

    let queue_status = match provider.fetch().await {
        Ok(queue_status) => queue_status,
        Err(error) => {
            log::warn!("queue_status_fetch_failed code={} error={}", error.code(), error);
            return CheckResult::critical(error.to_string());
        }
    };

    let key = HistoryKey::from_config(config);
    let average = match history::update(store, &key, config.samples, &queue_status.messages) {
        Ok(average) => average,
        Err(HistoryError::InvalidWindow) => {
            return CheckResult::unknown(HistoryError::InvalidWindow.to_string());
        }
        Err(error) => {
            log::warn!("sample_history_update_failed url={} error={}", url, error);
            return CheckResult::critical(format!("{} ({})", error, url));
        }
    };

    let window_full = average.samples >= config.samples;
    let status = if window_full {
        config.thresholds.evaluate(average.mean as f64)
    } else {
        Status::Ok
    };

    tracing::info!(
        target: "check",
        module = "check",
        queue = %config.queue,
        reported_name = queue_status.name.as_deref(),
        sample = %queue_status.messages,
        ready = queue_status.messages_ready,
        unacknowledged = queue_status.messages_unacknowledged,
        consumers = queue_status.consumers,
        average = average.mean,
        samples = average.samples,
        window = config.samples,
        window_full,
        status = %status,
        "queue_depth_checked"
    );

    let result = CheckResult::new(status, average_message(&config.queue, average));
    if config.perfdata {
        result.with_perfdata(perfdata(config, average))
    } else {
        result
    }
}
