//! Process-wide default logger.
//!
//! The default is held in an `ArcSwap`: [`set_logger`] replaces the whole logger in
//! one atomic store, and [`logger`] hands out an `Arc` that stays valid even if the
//! default is replaced while the caller is still using it.

use crate::logger::Logger;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

static DEFAULT: LazyLock<ArcSwap<Logger>> = LazyLock::new(|| ArcSwap::from_pointee(Logger::new()));

/// The current default logger, created with [`Logger::new`] on first use.
#[must_use]
pub fn logger() -> Arc<Logger> {
    DEFAULT.load_full()
}

/// Installs `logger` as the default and returns the one it replaced.
pub fn set_logger(logger: Logger) -> Arc<Logger> {
    DEFAULT.swap(Arc::new(logger))
}

/// Logs at Debug through the default logger.
///
/// ```
/// plainlog::debug!("cache miss for {}", "key");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::global::logger().debugf(::std::format_args!($($arg)+))
    };
}

/// Logs at Warning through the default logger.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::global::logger().warningf(::std::format_args!($($arg)+))
    };
}

/// Logs at Info through the default logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::global::logger().infof(::std::format_args!($($arg)+))
    };
}

/// Logs at Error through the default logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::global::logger().errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at Fatal through the default logger, then exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::global::logger().fatalf(::std::format_args!($($arg)+))
    };
}

/// Logs at Panic through the default logger, then panics with the message.
#[macro_export]
macro_rules! panic_log {
    ($($arg:tt)+) => {
        $crate::global::logger().panicf(::std::format_args!($($arg)+))
    };
}
