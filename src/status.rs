use std::fmt;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
    pub perfdata: Option<String>,
}

impl CheckResult {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            perfdata: None,
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Status::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Status::Unknown, message)
    }

    pub fn with_perfdata(mut self, perfdata: String) -> Self {
        self.perfdata = Some(perfdata);
        self
    }

    /// The single line written to stdout. Newlines in the message are
    /// flattened so the output always stays on one line.
    pub fn render(&self) -> String {
        let message = self.message.split_whitespace().collect::<Vec<_>>().join(" ");
        match &self.perfdata {
            Some(perfdata) => format!("{} {} | {}", self.status, message, perfdata),
            None => format!("{} {}", self.status, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckResult, Status};

    #[test]
    fn exit_codes_follow_plugin_convention() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::Warning.code(), 1);
        assert_eq!(Status::Critical.code(), 2);
        assert_eq!(Status::Unknown.code(), 3);
    }

    #[test]
    fn renders_exactly_one_line() {
        let result = CheckResult::critical("Connection Refused:\n http://localhost:15672");
        assert_eq!(
            result.render(),
            "CRITICAL Connection Refused: http://localhost:15672"
        );

        let with_perf = CheckResult::new(Status::Ok, "orders: Avg. Msgs: 4")
            .with_perfdata("avg=4;;;0;".to_string());
        assert_eq!(with_perf.render(), "OK orders: Avg. Msgs: 4 | avg=4;;;0;");
    }
}
