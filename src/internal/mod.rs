//! plainlog's own diagnostic logger, used while loading config and opening outputs.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! entry points (CLI, library callers, tests) race to call `init`.

use crate::level::Level;
use crate::logger::Logger;
use crate::template::Template;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::OnceLock;

const INTERNAL_TEMPLATE: &str = "plainlog: ${level} ${message}";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops. `Unknown` falls back to `Warning`.
pub fn init(level: Level) {
    init_with_output(level, io::stderr());
}

/// `init` with diagnostics sent to `sink` instead of stderr. Loses to any
/// earlier `init`, like `init` itself.
pub fn init_with_output<W: Write + Send + 'static>(level: Level, sink: W) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(level, sink));
    if !was_init {
        debug(format_args!("internal logger ready at {level}"));
    }
}

/// The diagnostic logger, or `None` before the first `init`.
#[must_use]
pub fn logger() -> Option<&'static Logger> {
    INTERNAL_LOGGER.get()
}

fn build_internal_logger<W: Write + Send + 'static>(level: Level, sink: W) -> Logger {
    let level = if level.is_known() {
        level
    } else {
        Level::Warning
    };

    Logger::builder()
        .level(level)
        .output(sink)
        .template(Template::parse(INTERNAL_TEMPLATE))
        .build()
        .unwrap_or_default()
}

/// Pre-init calls silently vanish rather than reaching a sink nobody configured.
#[track_caller]
fn log(level: Level, msg: impl Display) {
    if let Some(logger) = INTERNAL_LOGGER.get()
        && logger.enabled(level)
    {
        let _ = logger.log(level, &msg.to_string());
    }
}

#[track_caller]
pub fn debug(msg: impl Display) {
    log(Level::Debug, msg);
}

#[track_caller]
pub fn warning(msg: impl Display) {
    log(Level::Warning, msg);
}

#[track_caller]
pub fn info(msg: impl Display) {
    log(Level::Info, msg);
}

#[track_caller]
pub fn error(msg: impl Display) {
    log(Level::Error, msg);
}
