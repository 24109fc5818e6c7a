//! Severity levels that gate which calls reach the sink.

use std::fmt;
use std::str::FromStr;

/// Explicit discriminants are the rank; derived `Ord` compares a call's level
/// against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Level {
    /// Returned for unparsable names. Never a valid minimum level.
    Unknown = -1,
    /// Development diagnostics, too noisy for normal operation.
    Debug = 1,
    /// Anomalies worth noticing that do not stop anything.
    Warning = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Failures of a single operation.
    Error = 4,
    /// Logged right before the process exits with status 1.
    Fatal = 5,
    /// Logged right before the calling thread panics with the message.
    Panic = 6,
}

impl Level {
    /// Uppercase label used for rendering and for name lookup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// The six known levels in rank order; `Unknown` is deliberately absent.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Debug,
            Self::Warning,
            Self::Info,
            Self::Error,
            Self::Fatal,
            Self::Panic,
        ]
    }

    #[must_use]
    pub const fn rank(self) -> i8 {
        self as i8
    }

    /// Inverse of [`rank`](Self::rank); any other value maps to `Unknown`.
    #[must_use]
    pub const fn from_rank(rank: i8) -> Self {
        match rank {
            1 => Self::Debug,
            2 => Self::Warning,
            3 => Self::Info,
            4 => Self::Error,
            5 => Self::Fatal,
            6 => Self::Panic,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Case-insensitive lookup that never fails: unrecognized names yield `Unknown`.
    ///
    /// ```
    /// use plainlog::Level;
    ///
    /// assert_eq!(Level::parse("debug"), Level::Debug);
    /// assert_eq!(Level::parse("verbose"), Level::Unknown);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Config files and CLI arguments need a hard failure instead of the `Unknown` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            Self::Unknown => Err(ParseLevelError(s.to_string())),
            level => Ok(level),
        }
    }
}
