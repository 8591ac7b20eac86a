use crate::config::CheckConfig;
use crate::history::Average;

pub(super) fn average_message(queue: &str, average: Average) -> String {
    format!("{}: Avg. Msgs: {}", queue, average.mean)
}

pub(super) fn perfdata(config: &CheckConfig, average: Average) -> String {
    let warning = config
        .thresholds
        .warning
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let critical = config
        .thresholds
        .critical
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    format!(
        "avg={};{};{};0; samples={};;;0;{}",
        average.mean, warning, critical, average.samples, config.samples
    )
}

#[cfg(test)]
mod tests {
    use super::{average_message, perfdata};
    use crate::config::CheckConfig;
    use crate::history::Average;
    use crate::threshold::Range;

    #[test]
    fn message_uses_integer_average() {
        let average = Average {
            mean: 2067440,
            samples: 3,
        };
        assert_eq!(average_message("orders", average), "orders: Avg. Msgs: 2067440");
    }

    #[test]
    fn perfdata_includes_thresholds_and_window() {
        let mut config = CheckConfig::for_queue("orders");
        config.thresholds.warning = Some(Range::parse("100").expect("warning range"));

        let line = perfdata(&config, Average { mean: 42, samples: 2 });
        assert_eq!(line, "avg=42;100;;0; samples=2;;;0;3");
    }
}
