use super::Placeholder;

/// Typed substitution map: one optional slot per placeholder, so a value can only
/// ever be bound to a recognized token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    pub time: Option<String>,
    pub message: Option<String>,
    pub caller: Option<String>,
    pub caller_short: Option<String>,
    pub level: Option<String>,
    pub prefix: Option<String>,
}

impl Values {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Full `path:line` location.
    #[must_use]
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// `basename:line` location.
    #[must_use]
    pub fn caller_short(mut self, caller: impl Into<String>) -> Self {
        self.caller_short = Some(caller.into());
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the slot for `placeholder`, replacing any previous value.
    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        let value = Some(value.into());
        match placeholder {
            Placeholder::Time => self.time = value,
            Placeholder::Message => self.message = value,
            Placeholder::Caller => self.caller = value,
            Placeholder::CallerShort => self.caller_short = value,
            Placeholder::Level => self.level = value,
            Placeholder::Prefix => self.prefix = value,
        }
    }

    #[must_use]
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        match placeholder {
            Placeholder::Time => self.time.as_deref(),
            Placeholder::Message => self.message.as_deref(),
            Placeholder::Caller => self.caller.as_deref(),
            Placeholder::CallerShort => self.caller_short.as_deref(),
            Placeholder::Level => self.level.as_deref(),
            Placeholder::Prefix => self.prefix.as_deref(),
        }
    }

    pub(super) fn len_hint(&self) -> usize {
        Placeholder::ALL
            .iter()
            .filter_map(|ph| self.get(*ph))
            .map(str::len)
            .sum()
    }
}
