//! The per-call bundle handed to custom formatters.

use crate::level::Level;
use chrono::{DateTime, Local};
use std::path::Path;

/// Built fresh for every emitted call and dropped after the write. Formatters have
/// no declared field needs, so every field is always populated.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub message: &'a str,
    pub level: Level,
    pub level_label: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub prefix: &'a str,
}

impl Record<'_> {
    /// `path:line` of the logging call.
    #[must_use]
    pub fn caller(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }

    /// `basename:line` of the logging call.
    #[must_use]
    pub fn caller_short(&self) -> String {
        format!("{}:{}", basename(self.file), self.line)
    }
}

pub(crate) fn basename(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
