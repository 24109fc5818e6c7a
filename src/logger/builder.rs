//! One-shot construction for callers that know their whole configuration up front.

use super::{Formatter, Logger, RFC3339, State, normalize_template, validate_time_format};
use crate::error::Error;
use crate::level::Level;
use crate::output::{self, Sink};
use crate::record::Record;
use crate::template::Template;
use std::io::{self, Write};
use std::sync::Arc;

/// Collects settings and validates them once in [`build`](Self::build).
pub struct LoggerBuilder {
    level: Level,
    sink: Sink,
    discard: bool,
    template: Template,
    formatter: Option<Formatter>,
    prefix: String,
    time_format: String,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Same defaults as [`Logger::new`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            sink: Box::new(io::stderr()),
            discard: false,
            template: Template::default(),
            formatter: None,
            prefix: String::new(),
            time_format: RFC3339.to_string(),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn output<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.discard = output::is_discard(&sink);
        self.sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Record<'_>) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// # Errors
    /// `Error::InvalidLevel` for an `Unknown` level and `Error::InvalidTimeFormat`
    /// for a pattern chrono cannot format.
    pub fn build(self) -> Result<Logger, Error> {
        if !self.level.is_known() {
            return Err(Error::InvalidLevel(self.level.to_string()));
        }

        let state = State {
            sink: self.sink,
            prefix: self.prefix,
            template: normalize_template(self.template),
            formatter: self.formatter,
            time_format: validate_time_format(self.time_format)?,
        };

        Ok(Logger::from_parts(self.level, self.discard, state))
    }
}
