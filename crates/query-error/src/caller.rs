//! Caller location capture.
//!
//! Constructors rely on `#[track_caller]`, which is free at runtime and always
//! exact. [`caller_n`] walks the live stack instead, for callers that need to
//! report a frame further out than their direct caller.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

const UNKNOWN_FILE: &str = "unknown";

/// Where an error was constructed: base file name without extension, and line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller {
    file: Cow<'static, str>,
    line: u32,
}

impl Caller {
    /// Capture the location of whoever called this function.
    #[track_caller]
    pub fn here() -> Self {
        let location: &'static Location<'static> = Location::caller();
        Self {
            file: Cow::Borrowed(file_stem(location.file())),
            line: location.line(),
        }
    }

    /// The sentinel used when no frame can be inspected.
    pub const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed(UNKNOWN_FILE),
            line: 0,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.file == UNKNOWN_FILE
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(UNKNOWN_FILE)
}

/// Location of the caller's caller, as `"file:line"`.
#[track_caller]
pub fn caller() -> String {
    Caller::here().to_string()
}

/// Walk the stack and return `"file:line"` for the frame `skip` levels above
/// the direct caller of this function, or `"unknown:0"` when that frame does
/// not exist or carries no line information.
#[inline(never)]
pub fn caller_n(skip: usize) -> String {
    resolve_frame(skip).unwrap_or_else(Caller::unknown).to_string()
}

#[inline(never)]
fn resolve_frame(skip: usize) -> Option<Caller> {
    let trace = backtrace::Backtrace::new();

    // Inlined calls show up as extra symbols on one frame, so walk symbols.
    let mut symbols = trace.frames().iter().flat_map(|frame| frame.symbols());
    symbols.by_ref().find(|symbol| {
        symbol
            .name()
            .map(|name| name.to_string().contains("caller::caller_n"))
            .unwrap_or(false)
    })?;

    let target = symbols.nth(skip)?;
    let line = target.lineno()?;
    let file = target
        .filename()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())?
        .to_string();

    Some(Caller {
        file: Cow::Owned(file),
        line,
    })
}
