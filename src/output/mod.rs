//! Sinks are plain `std::io::Write` values. This module adds the pieces the logger
//! needs around them: recognizing the no-op sink, capturing output in memory, and
//! opening a destination named in configuration.

mod buffer;
mod file;

pub use buffer::Buffer;
pub use file::Target;

use std::any::Any;
use std::io::{self, Write};

/// Boxed destination owned by a logger.
pub type Sink = Box<dyn Write + Send>;

/// True when `W` is `std::io::Sink`, the provable no-op destination.
#[must_use]
pub fn is_discard<W: Write + 'static>(writer: &W) -> bool {
    (writer as &dyn Any).is::<io::Sink>()
}
