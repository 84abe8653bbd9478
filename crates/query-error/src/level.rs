//! Severity level of an error

use std::fmt;

/// How severe an error is.
///
/// Every kind in the current table is raised as an `Exception`. The other
/// levels let callers downgrade a constructed error with
/// [`Error::with_level`](crate::Error::with_level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ErrorLevel {
    /// The request cannot proceed.
    #[default]
    Exception,

    /// Something went wrong but the request still produced a result.
    Warning,

    Notice,
    Info,
    Log,
    Debug,
}

impl ErrorLevel {
    /// Check if this level aborts the request
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorLevel::Exception)
    }

    /// Check if this level is a warning
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorLevel::Warning)
    }

    /// Get level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorLevel::Exception => "exception",
            ErrorLevel::Warning => "warning",
            ErrorLevel::Notice => "notice",
            ErrorLevel::Info => "info",
            ErrorLevel::Log => "log",
            ErrorLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
