//! Placeholder templates that define the shape of a rendered line.
//!
//! Tokens are fixed literal markers like `${time}`. There is no escaping, no nesting
//! and no conditional logic: parsing is one scan and rendering is one pass over the
//! parsed segments.

mod values;

pub use values::Values;

use std::fmt;
use std::sync::Arc;

/// `${time} ${level} ${message}` followed by a newline.
pub const DEFAULT_TEMPLATE: &str = "${time} ${level} ${message}\n";
/// Default layout plus the short caller location.
pub const VERBOSE_TEMPLATE: &str = "${time} ${level} ${message} [${caller_short}]";

/// Closed set of recognized tokens. Anything else in a template is literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Time,
    Message,
    Caller,
    CallerShort,
    Level,
    Prefix,
}

impl Placeholder {
    pub const ALL: &'static [Self] = &[
        Self::Time,
        Self::Message,
        Self::Caller,
        Self::CallerShort,
        Self::Level,
        Self::Prefix,
    ];

    /// The literal marker as it appears in template text.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Time => "${time}",
            Self::Message => "${message}",
            Self::Caller => "${caller}",
            Self::CallerShort => "${caller_short}",
            Self::Level => "${level}",
            Self::Prefix => "${prefix}",
        }
    }

    /// Maps a literal token back to its placeholder; unrecognized tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.token() == token)
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Parsed once, rendered many times. Cloning shares the parsed segments.
#[derive(Debug, Clone)]
pub struct Template {
    text: Arc<str>,
    segments: Arc<[Segment]>,
    present: u8,
}

impl Template {
    /// Always succeeds: text without any token is a valid, fully literal template.
    ///
    /// No token is a prefix of another and none contains `$` past its first byte,
    /// so matching greedily at each position finds exactly the tokens that occur
    /// as substrings.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut present = 0u8;
        let mut literal = String::new();
        let mut rest = text;

        while let Some(idx) = rest.find("${") {
            let (before, candidate) = rest.split_at(idx);
            literal.push_str(before);

            match Placeholder::ALL
                .iter()
                .copied()
                .find(|ph| candidate.starts_with(ph.token()))
            {
                Some(ph) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(ph));
                    present |= ph.bit();
                    rest = &candidate[ph.token().len()..];
                }
                None => {
                    // Only the `$` is consumed so a token starting at `{` is not skipped.
                    literal.push('$');
                    rest = &candidate[1..];
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            text: Arc::from(text),
            segments: segments.into(),
            present,
        }
    }

    #[must_use]
    pub fn verbose() -> Self {
        Self::parse(VERBOSE_TEMPLATE)
    }

    /// Reads the presence set recorded at parse time.
    #[must_use]
    pub const fn has(&self, placeholder: Placeholder) -> bool {
        self.present & placeholder.bit() != 0
    }

    /// String form of [`has`](Self::has). Unrecognized tokens are simply absent.
    #[must_use]
    pub fn has_token(&self, token: &str) -> bool {
        Placeholder::from_token(token).is_some_and(|ph| self.has(ph))
    }

    /// Whitespace-only text counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitutes every placeholder that has a value in `values`.
    ///
    /// Values are copied into the output and never rescanned, so a value that
    /// itself looks like a token stays verbatim. Placeholders without a value are
    /// left as their literal token.
    #[must_use]
    pub fn render(&self, values: &Values) -> String {
        let mut out = String::with_capacity(self.text.len() + values.len_hint());

        for segment in self.segments.iter() {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Placeholder(ph) => out.push_str(values.get(*ph).unwrap_or(ph.token())),
            }
        }

        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Template {}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
