//! `plainlog` - minimal leveled text logger driven by placeholder templates.
//!
//! A log call is gated by a minimum level, rendered through a template such as
//! `${time} ${level} ${message}`, and written to any `std::io::Write` sink.
//!
//! # Example
//!
//! ```
//! use plainlog::{Level, Logger, Template, output::Buffer};
//!
//! let buffer = Buffer::new();
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .output(buffer.clone())
//!     .template(Template::parse("${level} ${message}"))
//!     .build()
//!     .unwrap();
//!
//! logger.info("application started");
//! logger.debugf(format_args!("listening on port {}", 8080));
//!
//! assert_eq!(
//!     buffer.contents(),
//!     "INFO       application started\nDEBUG      listening on port 8080\n"
//! );
//! ```
//!
//! # Placeholders
//!
//! | Token | Value |
//! |---|---|
//! | `${time}` | timestamp in the logger's strftime format (RFC 3339 by default) |
//! | `${level}` | level label, left-justified to 10 columns |
//! | `${message}` | the message, inserted verbatim |
//! | `${caller}` | `path:line` of the logging call |
//! | `${caller_short}` | `file:line` of the logging call |
//! | `${prefix}` | the logger's prefix |
//!
//! # Features
//!
//! - `cli` (default): the `plainlog` command-line binary

pub mod config;
pub mod error;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod record;
pub mod template;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{Formatter, Logger, LoggerBuilder};
pub use output::Target;
pub use record::Record;
pub use template::{Placeholder, Template, Values};
