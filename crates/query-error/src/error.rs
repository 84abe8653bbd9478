//! The main Error type for the query service.

use std::fmt;

use crate::band::Band;
use crate::caller::Caller;
use crate::kind::ErrorKind;
use crate::level::ErrorLevel;
use crate::registry::ErrorDescriptor;

/// Boxed underlying error carried as a cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A raised error: kind, rendered message, caller location and optional cause.
pub struct Error {
    kind: ErrorKind,
    message: String,
    level: ErrorLevel,
    caller: Caller,
    source: Option<BoxError>,
}

impl Error {
    /// Create an error of `kind`, rendering its template against `args`.
    ///
    /// The caller location recorded is that of whoever called `new`, or of
    /// whoever called the `#[track_caller]` constructor that called it.
    #[track_caller]
    pub fn new(kind: ErrorKind, args: &[&dyn fmt::Display]) -> Self {
        Self {
            kind,
            message: kind.render(args),
            level: kind.level(),
            caller: Caller::here(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    /// Dotted key, stable independently of the code
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    pub fn band(&self) -> Band {
        self.kind.band()
    }

    pub fn descriptor(&self) -> ErrorDescriptor {
        self.kind.descriptor()
    }

    /// Get the rendered message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> ErrorLevel {
        self.level
    }

    /// Where the error was constructed.
    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn is_fatal(&self) -> bool {
        self.level.is_fatal()
    }

    pub fn is_warning(&self) -> bool {
        self.level.is_warning()
    }

    /// Override the level the kind is raised at.
    pub fn with_level(mut self, level: ErrorLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<BoxError>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }

    /// Walk the cause chain, nearest cause first.
    pub fn causes(&self) -> Causes<'_> {
        Causes {
            next: self.source_ref().map(|source| source as &(dyn std::error::Error + 'static)),
        }
    }
}

/// Iterator over the chain of causes of an [`Error`].
pub struct Causes<'a> {
    next: Option<&'a (dyn std::error::Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn std::error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.message.is_empty()) {
            (Some(source), false) => write!(f, "{} - cause: {}", self.message, source),
            (None, false) => write!(f, "{}", self.message),
            (Some(source), true) => write!(f, "{}", source),
            (None, true) => write!(f, "Unspecified error."),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] ({}) at {}", self.code(), self.key(), self.level, self.caller)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::ServiceTypeMismatch, &[&"pretty", &"boolean"]);
        assert_eq!(err.kind(), ErrorKind::ServiceTypeMismatch);
        assert_eq!(err.code(), 1070);
        assert_eq!(err.key(), "service.io.request.type_mismatch");
        assert_eq!(err.message(), "pretty has to be of type boolean");
        assert_eq!(err.level(), ErrorLevel::Exception);
        assert!(err.is_fatal());
        assert!(err.source_ref().is_none());
    }

    #[test]
    fn test_caller_is_construction_site() {
        let err = Error::new(ErrorKind::ServiceReadonly, &[]);
        let line = line!() - 1;
        assert_eq!(err.caller().to_string(), format!("error:{line}"));
    }

    #[test]
    fn test_with_level() {
        let err = Error::new(ErrorKind::ServiceInvalidJson, &[]).with_level(ErrorLevel::Warning);
        assert!(err.is_warning());
        assert!(!err.is_fatal());
        assert_eq!(err.code(), 1100);
    }

    #[test]
    fn test_set_source() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::new(ErrorKind::FileKeyspaceNotFound, &[&"default"]).set_source(io_err);

        let source = err.source_ref().expect("source");
        let io_source = source.downcast_ref::<io::Error>().expect("io error");
        assert_eq!(io_source.kind(), io::ErrorKind::NotFound);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::AdminNoSuchNode, &[&"node-7"]);
        assert_eq!(err.to_string(), "No such node node-7");

        let err = Error::new(ErrorKind::CbConnection, &[&"timeout"]).set_source("refused");
        assert_eq!(err.to_string(), "Cannot connect: timeout - cause: refused");
    }

    #[test]
    fn test_debug_has_code_key_and_caller() {
        let err = Error::new(ErrorKind::PlanNoTermName, &[&"Result"]).set_source("bad term");
        let debug = format!("{:?}", err);
        assert!(debug.contains("4010"));
        assert!(debug.contains("plan.build_select.no_term_name"));
        assert!(debug.contains("exception"));
        assert!(debug.contains("at error:"));
        assert!(debug.contains("Message: Result term must have a name or alias"));
        assert!(debug.contains("Source:"));
    }

    #[test]
    fn test_causes_chain() {
        let root = io::Error::other("disk full");
        let inner = Error::new(ErrorKind::FileDml, &[&"insert"]).set_source(root);
        let outer = Error::new(ErrorKind::ServiceBadValue, &[&"statement"]).set_source(inner);

        let chain: Vec<String> = outer.causes().map(|cause| cause.to_string()).collect();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0], "DML error: insert - cause: disk full");
        assert_eq!(chain[1], "disk full");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }
}
