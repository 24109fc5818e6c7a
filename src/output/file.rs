//! Destinations that can be named in a config file or on the command line.

use crate::internal;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Named destination. Anything that is not a reserved word is a file path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Stderr,
    Stdout,
    /// Maps to `std::io::Sink`, which turns on the logger's fast-path skip.
    Discard,
    /// Appended to, created along with missing parent directories.
    File(PathBuf),
}

impl Target {
    /// `stderr`, `stdout`, `discard` (or `null`), otherwise a path; a leading `~` is expanded.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "stderr" => Self::Stderr,
            "stdout" => Self::Stdout,
            "discard" | "null" => Self::Discard,
            _ => {
                let expanded = shellexpand::tilde(name.trim());
                Self::File(PathBuf::from(expanded.as_ref()))
            }
        }
    }

    /// Opens `path` for appending, creating parent directories as needed.
    ///
    /// # Errors
    /// I/O errors from directory creation or from opening the file.
    pub fn open_file(path: &Path) -> io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(format_args!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ));
                return Err(e);
            }
            internal::debug(format_args!("created directory {}", parent.display()));
        }

        OpenOptions::new().create(true).append(true).open(path)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("stderr"),
            Self::Stdout => f.write_str("stdout"),
            Self::Discard => f.write_str("discard"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}
