use std::fmt;

use crate::status::Status;

#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub(super) start: f64,
    pub(super) end: f64,
    pub(super) alert_inside: bool,
    pub(super) expression: String,
}

impl Range {
    /// Returns true when `value` should raise an alert for this range.
    pub fn matches(&self, value: f64) -> bool {
        let outside = value < self.start || value > self.end;
        if self.alert_inside { !outside } else { outside }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Thresholds {
    pub warning: Option<Range>,
    pub critical: Option<Range>,
}

impl Thresholds {
    pub fn evaluate(&self, value: f64) -> Status {
        if self.critical.as_ref().is_some_and(|range| range.matches(value)) {
            return Status::Critical;
        }
        if self.warning.as_ref().is_some_and(|range| range.matches(value)) {
            return Status::Warning;
        }
        Status::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::{Range, Thresholds};
    use crate::status::Status;

    fn thresholds(warning: &str, critical: &str) -> Thresholds {
        Thresholds {
            warning: Some(Range::parse(warning).expect("warning range")),
            critical: Some(Range::parse(critical).expect("critical range")),
        }
    }

    #[test]
    fn worst_matching_severity_wins() {
        let thresholds = thresholds("100", "1000");
        assert_eq!(thresholds.evaluate(50.0), Status::Ok);
        assert_eq!(thresholds.evaluate(101.0), Status::Warning);
        assert_eq!(thresholds.evaluate(1001.0), Status::Critical);
    }

    #[test]
    fn missing_thresholds_never_alert() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.evaluate(6_201_768.0), Status::Ok);

        let critical_only = Thresholds {
            warning: None,
            critical: Some(Range::parse("~:10").expect("critical range")),
        };
        assert_eq!(critical_only.evaluate(5.0), Status::Ok);
        assert_eq!(critical_only.evaluate(11.0), Status::Critical);
    }

    #[test]
    fn displays_trimmed_expression() {
        let range = Range::parse(" @10:20 ").expect("range should parse");
        assert_eq!(range.to_string(), "@10:20");
    }
}
