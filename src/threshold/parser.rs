use thiserror::Error;

use super::range::Range;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("empty threshold expression")]
    Empty,
    #[error("invalid number {value:?} in threshold {expression:?}")]
    InvalidNumber { expression: String, value: String },
    #[error("range start {start} is greater than end {end} in {expression:?}")]
    Inverted {
        expression: String,
        start: f64,
        end: f64,
    },
}

impl Range {
    /// Parses a monitoring-plugin range: `10`, `10:`, `~:10`, `10:20` or
    /// `@10:20`. Bounds are inclusive.
    pub fn parse(input: &str) -> Result<Self, ThresholdError> {
        let expression = input.trim();
        if expression.is_empty() {
            return Err(ThresholdError::Empty);
        }

        let (alert_inside, body) = match expression.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, expression),
        };

        let (start, end) = match body.split_once(':') {
            Some((start_text, end_text)) => {
                let start = match start_text {
                    "~" => f64::NEG_INFINITY,
                    "" => 0.0,
                    text => parse_bound(expression, text)?,
                };
                let end = match end_text {
                    "" => f64::INFINITY,
                    text => parse_bound(expression, text)?,
                };
                (start, end)
            }
            None => (0.0, parse_bound(expression, body)?),
        };

        if start > end {
            return Err(ThresholdError::Inverted {
                expression: expression.to_string(),
                start,
                end,
            });
        }

        Ok(Self {
            start,
            end,
            alert_inside,
            expression: expression.to_string(),
        })
    }
}

fn parse_bound(expression: &str, text: &str) -> Result<f64, ThresholdError> {
    let invalid = || ThresholdError::InvalidNumber {
        expression: expression.to_string(),
        value: text.to_string(),
    };

    let value = text.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{Range, ThresholdError};

    #[test]
    fn plain_number_alerts_outside_zero_to_value() {
        let range = Range::parse("10").expect("range should parse");
        assert!(!range.matches(0.0));
        assert!(!range.matches(10.0));
        assert!(range.matches(10.5));
        assert!(range.matches(-1.0));
    }

    #[test]
    fn open_ended_forms() {
        let lower = Range::parse("10:").expect("range should parse");
        assert!(lower.matches(9.0));
        assert!(!lower.matches(10.0));
        assert!(!lower.matches(1_000_000.0));

        let upper = Range::parse("~:10").expect("range should parse");
        assert!(!upper.matches(-500.0));
        assert!(!upper.matches(10.0));
        assert!(upper.matches(11.0));
    }

    #[test]
    fn bounded_and_inverted_forms() {
        let outside = Range::parse("10:20").expect("range should parse");
        assert!(outside.matches(9.0));
        assert!(!outside.matches(15.0));
        assert!(outside.matches(21.0));

        let inside = Range::parse("@10:20").expect("range should parse");
        assert!(!inside.matches(9.0));
        assert!(inside.matches(10.0));
        assert!(inside.matches(20.0));
        assert!(!inside.matches(21.0));
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert_eq!(Range::parse("  "), Err(ThresholdError::Empty));
        assert!(matches!(
            Range::parse("ten"),
            Err(ThresholdError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Range::parse("5:x"),
            Err(ThresholdError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Range::parse("inf"),
            Err(ThresholdError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Range::parse("20:10"),
            Err(ThresholdError::Inverted { .. })
        ));
    }
}
