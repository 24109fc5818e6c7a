//! Command-line front end: emit one line through a logger built from config.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Warning,
    Info,
    Error,
    Fatal,
    Panic,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Warning => Self::Warning,
            LogLevel::Info => Self::Info,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
            LogLevel::Panic => Self::Panic,
        }
    }
}

/// plainlog - write a templated log line from the command line.
#[derive(Debug, Parser)]
#[command(name = "plainlog", version, about = "Write a templated log line")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum level, overriding the config
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub min_level: Option<LogLevel>,

    /// Template text, or `default` / `verbose`
    #[arg(short, long)]
    pub template: Option<String>,

    /// stderr, stdout, discard, or a file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Value for `${prefix}`
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Level of the line
    #[arg(value_enum)]
    pub level: LogLevel,

    /// Message words, joined with single spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(level) = self.min_level {
            config.level = Level::from(level).to_string();
        }
        if let Some(template) = &self.template {
            config.template.clone_from(template);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        config
    }
}

/// Loads config, builds the logger and writes the message. Fatal exits with
/// status 1 and Panic panics, exactly as the library entry points do.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => cli.merge_into(c),
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match Logger::from_config(&config) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error building logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    let message = cli.message.join(" ");
    match cli.level {
        LogLevel::Fatal => logger.fatal(message),
        LogLevel::Panic => logger.panic(message),
        level => {
            if let Err(e) = logger.log(level.into(), &message) {
                eprintln!("Error writing log line: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error flushing output: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Target;
    use crate::template::Template;

    #[test]
    fn parses_level_and_message() {
        let cli = Cli::try_parse_from(["plainlog", "warning", "disk", "almost", "full"]).unwrap();
        assert_eq!(cli.level, LogLevel::Warning);
        assert_eq!(cli.message.join(" "), "disk almost full");
    }

    #[test]
    fn message_is_required() {
        assert!(Cli::try_parse_from(["plainlog", "info"]).is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "plainlog",
            "--min-level",
            "debug",
            "--template",
            "verbose",
            "-o",
            "stdout",
            "info",
            "x",
        ])
        .unwrap();
        let config = cli.merge_into(Config::default());
        assert_eq!(config.level, "DEBUG");
        assert_eq!(config.parse_template(), Template::verbose());
        assert_eq!(config.parse_target(), Target::Stdout);
    }
}
