//! Logger construction from a [`Config`].

use super::Logger;
use crate::config::Config;
use crate::error::Error;
use crate::internal;

impl Logger {
    /// Loads the user's config file and builds a logger from it.
    ///
    /// # Errors
    /// Config loading errors, plus everything [`from_config`](Self::from_config) reports.
    pub fn load() -> Result<Self, Error> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// # Errors
    /// Invalid level or time format, or an output file that cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        internal::init(config.parse_internal_level());
        internal::debug(format_args!("building logger at level {}", config.level));

        let logger = Self::builder()
            .level(config.parse_level()?)
            .template(config.parse_template())
            .prefix(config.prefix.as_str())
            .time_format(config.time_format.as_str())
            .build()?;
        logger.set_target(&config.parse_target())?;

        internal::debug("logger ready");
        Ok(logger)
    }
}
