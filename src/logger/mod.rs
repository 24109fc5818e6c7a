//! The logger: level gate, field assembly, rendering and the write to the sink.
//!
//! Configuration lives behind one `Mutex` that is held for the whole
//! render-and-write of a call, so a call never sees half of a concurrent
//! reconfiguration. The minimum level and the discard flag are mirrored in atomics
//! so a gated call returns before touching the lock, the clock or the caller.

mod builder;
mod entry;
mod from_config;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::output::{self, Sink, Target};
use crate::record::{Record, basename};
use crate::template::{Placeholder, Template, Values};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicI8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// RFC 3339 with a numeric offset, e.g. `2024-05-01T12:00:00+02:00`.
pub const RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// `${level}` is left-justified to this width so messages line up.
pub const LEVEL_WIDTH: usize = 10;

/// Full-record renderer that replaces the template when installed.
pub type Formatter = Arc<dyn Fn(&Record<'_>) -> String + Send + Sync>;

/// Shared, thread-safe logger. Every setter takes `&self`, so one instance can be
/// reconfigured while other threads keep logging through it.
pub struct Logger {
    min_level: AtomicI8,
    discard: AtomicBool,
    state: Mutex<State>,
}

struct State {
    sink: Sink,
    prefix: String,
    template: Template,
    formatter: Option<Formatter>,
    time_format: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            sink: Box::new(io::stderr()),
            prefix: String::new(),
            template: Template::default(),
            formatter: None,
            time_format: RFC3339.to_string(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Minimum level Info, stderr, the default template and RFC 3339 timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Level::Info, false, State::default())
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(level: Level, discard: bool, state: State) -> Self {
        Self {
            min_level: AtomicI8::new(level.rank()),
            discard: AtomicBool::new(discard),
            state: Mutex::new(state),
        }
    }

    /// A panicking custom formatter poisons the lock; the state itself stays valid.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Calls ranked below `level` are dropped before any rendering work.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for `Level::Unknown`.
    pub fn set_level(&self, level: Level) -> Result<&Self, Error> {
        if !level.is_known() {
            return Err(Error::InvalidLevel(level.to_string()));
        }
        self.min_level.store(level.rank(), Ordering::Release);
        Ok(self)
    }

    /// Replaces the destination. Passing `std::io::sink()` turns on the fast-path
    /// skip; a `Sink` that was already boxed is never recognized as a no-op.
    pub fn set_output<W: Write + Send + 'static>(&self, sink: W) -> &Self {
        let discard = output::is_discard(&sink);
        let mut state = self.lock();
        state.sink = Box::new(sink);
        self.discard.store(discard, Ordering::Release);
        drop(state);
        self
    }

    /// Resolves a named destination and installs it.
    ///
    /// # Errors
    /// I/O errors from opening a file target.
    pub fn set_target(&self, target: &Target) -> Result<&Self, Error> {
        match target {
            Target::Stderr => self.set_output(io::stderr()),
            Target::Stdout => self.set_output(io::stdout()),
            Target::Discard => self.set_output(io::sink()),
            Target::File(path) => self.set_output(Target::open_file(path)?),
        };
        internal::debug(format_args!("output set to {target}"));
        Ok(self)
    }

    /// An empty or whitespace-only template is replaced by the default here, so the
    /// write path never has to repair configuration.
    pub fn set_template(&self, template: Template) -> &Self {
        let template = normalize_template(template);
        self.lock().template = template;
        self
    }

    /// While a formatter is installed the template is not consulted at all.
    pub fn set_template_formatter<F>(&self, formatter: F) -> &Self
    where
        F: Fn(&Record<'_>) -> String + Send + Sync + 'static,
    {
        self.lock().formatter = Some(Arc::new(formatter));
        self
    }

    pub fn clear_template_formatter(&self) -> &Self {
        self.lock().formatter = None;
        self
    }

    /// Substituted for `${prefix}`.
    pub fn set_prefix(&self, prefix: impl Into<String>) -> &Self {
        self.lock().prefix = prefix.into();
        self
    }

    /// strftime pattern used for `${time}`.
    ///
    /// # Errors
    /// `Error::InvalidTimeFormat` if chrono rejects any specifier.
    pub fn set_time_format(&self, format: impl Into<String>) -> Result<&Self, Error> {
        let format = validate_time_format(format.into())?;
        self.lock().time_format = format;
        Ok(self)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_rank(self.min_level.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn template(&self) -> Template {
        self.lock().template.clone()
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    #[must_use]
    pub fn time_format(&self) -> String {
        self.lock().time_format.clone()
    }

    #[must_use]
    pub fn has_formatter(&self) -> bool {
        self.lock().formatter.is_some()
    }

    /// True while the sink is `std::io::sink()`.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        self.discard.load(Ordering::Acquire)
    }

    /// Whether a call at `level` would reach the sink.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level() && !self.is_discard()
    }

    /// Same as [`Level::parse`]: case-insensitive, `Unknown` for anything else.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn parse_level(&self, name: &str) -> Level {
        Level::parse(name)
    }

    /// Renders `message` and writes it to the sink as one buffer ending in a newline.
    ///
    /// `caller` is the location reported by `${caller}` and `${caller_short}`;
    /// entry points pass `Location::caller()` from a `#[track_caller]` frame.
    ///
    /// # Errors
    /// Whatever the sink returns, unchanged. Gated calls always succeed.
    pub fn write(
        &self,
        level: Level,
        caller: &'static Location<'static>,
        message: &str,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let now = Local::now();
        let mut state = self.lock();

        let mut text = state.render(level, caller, now, message);
        if !text.ends_with('\n') {
            text.push('\n');
        }

        state.sink.write_all(text.as_bytes())
    }

    /// [`write`](Self::write) with the calling location.
    ///
    /// # Errors
    /// Whatever the sink returns, unchanged.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str) -> io::Result<()> {
        self.write(level, Location::caller(), message)
    }

    /// # Errors
    /// Whatever the sink's `flush` returns.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().sink.flush()
    }
}

impl State {
    /// Only the fields the template uses are computed.
    fn render(
        &self,
        level: Level,
        caller: &'static Location<'static>,
        now: DateTime<Local>,
        message: &str,
    ) -> String {
        if let Some(formatter) = &self.formatter {
            let record = Record {
                time: now,
                message,
                level,
                level_label: level.as_str(),
                file: caller.file(),
                line: caller.line(),
                prefix: &self.prefix,
            };
            return formatter(&record);
        }

        let template = &self.template;
        let mut values = Values::new();

        if template.has(Placeholder::Time) {
            values.time = Some(now.format(&self.time_format).to_string());
        }
        if template.has(Placeholder::Caller) {
            values.caller = Some(format!("{}:{}", caller.file(), caller.line()));
        }
        if template.has(Placeholder::CallerShort) {
            values.caller_short = Some(format!("{}:{}", basename(caller.file()), caller.line()));
        }
        if template.has(Placeholder::Level) {
            values.level = Some(format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH));
        }
        if template.has(Placeholder::Prefix) {
            values.prefix = Some(self.prefix.clone());
        }
        values.message = Some(message.to_string());

        template.render(&values)
    }
}

fn normalize_template(template: Template) -> Template {
    if template.is_empty() {
        internal::debug("empty template replaced with the default");
        Template::default()
    } else {
        template
    }
}

fn validate_time_format(format: String) -> Result<String, Error> {
    if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidTimeFormat(format));
    }
    Ok(format)
}
