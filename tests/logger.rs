//! Tests for the logger: gating, rendering, formatters and sink errors.

use chrono::DateTime;
use plainlog::output::Buffer;
use plainlog::{Error, Level, Logger, Template};
use std::io::{self, Write};

fn logger_with_buffer() -> (Logger, Buffer) {
    let buffer = Buffer::new();
    let logger = Logger::new();
    logger.set_output(buffer.clone());
    (logger, buffer)
}

#[test]
fn defaults() {
    let logger = Logger::new();
    assert_eq!(logger.level(), Level::Info);
    assert_eq!(logger.template(), Template::default());
    assert_eq!(logger.prefix(), "");
    assert!(!logger.is_discard());
    assert!(!logger.has_formatter());
}

#[test]
fn default_info_line() {
    let (logger, buffer) = logger_with_buffer();
    logger.info("hello");

    let out = buffer.contents();
    let line = out.strip_suffix('\n').unwrap();
    assert!(!line.ends_with('\n'));
    let (time, rest) = line.split_once(' ').unwrap();
    assert!(DateTime::parse_from_rfc3339(time).is_ok(), "{time}");
    assert_eq!(rest, "INFO       hello");
}

#[test]
fn gate_follows_rank() {
    for min in Level::all() {
        let (logger, buffer) = logger_with_buffer();
        logger.set_level(min).unwrap();
        for level in Level::all() {
            buffer.clear();
            logger.log(level, "m").unwrap();
            assert_eq!(
                !buffer.is_empty(),
                level >= min,
                "level {level} with minimum {min}"
            );
        }
    }
}

#[test]
fn below_minimum_writes_nothing() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_level(Level::Error).unwrap();
    logger.warning("ignored");
    logger.warningln("ignored");
    logger.warningf(format_args!("ignored {}", 1));
    assert!(buffer.is_empty());
}

#[test]
fn unknown_level_calls_are_dropped() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_level(Level::Debug).unwrap();
    logger.log(Level::Unknown, "m").unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn verbose_template_reports_the_calling_line() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::verbose());
    let line = line!() + 1;
    logger.error("boom");

    let out = buffer.contents();
    assert!(out.contains("ERROR      boom"), "{out}");
    assert!(out.ends_with(&format!("[logger.rs:{line}]\n")), "{out}");
}

#[test]
fn full_caller_contains_path() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::parse("${caller}"));
    let line = line!() + 1;
    logger.infof(format_args!("x"));
    assert_eq!(buffer.contents(), format!("{}:{line}\n", file!()));
}

#[test]
fn formatter_bypasses_template() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_level(Level::Debug).unwrap();
    logger.set_template(Template::parse("${level} ${message}"));
    logger.set_template_formatter(|_| "X".to_string());
    logger.debug("anything");
    assert_eq!(buffer.contents(), "X\n");
    assert!(logger.has_formatter());
}

#[test]
fn clearing_formatter_restores_template() {
    let (logger, buffer) = logger_with_buffer();
    logger
        .set_template(Template::parse("${message}"))
        .set_template_formatter(|r| r.message.to_uppercase());
    logger.info("a");
    logger.clear_template_formatter();
    logger.info("b");
    assert_eq!(buffer.contents(), "A\nb\n");
}

#[test]
fn formatter_receives_caller() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template_formatter(|r| r.caller_short());
    let line = line!() + 1;
    logger.info("x");
    assert_eq!(buffer.contents(), format!("logger.rs:{line}\n"));
}

#[test]
fn ln_variants_report_their_own_line() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_level(Level::Debug).unwrap();
    logger.set_template(Template::parse("${caller_short}|${message}"));

    let first = line!() + 1;
    logger.errorln("e");
    let second = line!() + 1;
    logger.debugln(format_args!("d{}", 2));

    assert_eq!(
        buffer.contents(),
        format!("logger.rs:{first}|e\nlogger.rs:{second}|d2\n")
    );
}

#[test]
fn panicln_reports_its_line_and_keeps_the_newline() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::parse("${caller_short}|${message}"));
    let line = line!() + 2;
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panicln("p");
    }));

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("p\n"));
    assert_eq!(buffer.contents(), format!("logger.rs:{line}|p\n"));
}

#[test]
fn parse_level_on_the_logger_matches_level_parse() {
    let logger = Logger::new();
    for name in ["debug", "WARNING", "Info", "error", "fatal", "panic", "loud", ""] {
        assert_eq!(logger.parse_level(name), Level::parse(name), "{name}");
    }
    assert_eq!(logger.parse_level("ErRoR"), Level::Error);
    assert_eq!(logger.parse_level("trace"), Level::Unknown);
}

#[test]
fn message_text_is_never_substituted() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::parse("${level}|${message}"));
    logger.info("literal ${level} ${time} ${message}");
    assert_eq!(
        buffer.contents(),
        "INFO      |literal ${level} ${time} ${message}\n"
    );
}

#[test]
fn newline_added_only_when_missing() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::parse("${message}\n\n"));
    logger.info("a");
    assert_eq!(buffer.contents(), "a\n\n");

    buffer.clear();
    logger.set_template(Template::parse("${message}"));
    logger.info("b");
    logger.infoln("c");
    assert_eq!(buffer.contents(), "b\nc\n");
}

#[test]
fn ln_variant_keeps_message_newline() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::parse("${level}${message}"));
    logger.errorln("x");
    assert_eq!(buffer.contents(), "ERROR     x\n");

    buffer.clear();
    logger.set_template(Template::default());
    logger.set_time_format("T").unwrap();
    logger.infoln("y");
    assert_eq!(buffer.contents(), "T INFO       y\n\n");
}

#[test]
fn prefix_is_substituted() {
    let (logger, buffer) = logger_with_buffer();
    logger
        .set_prefix("svc")
        .set_template(Template::parse("[${prefix}] ${message}"));
    logger.info("up");
    assert_eq!(buffer.contents(), "[svc] up\n");
}

#[test]
fn custom_time_format() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_time_format("%Y").unwrap();
    logger.set_template(Template::parse("${time}"));
    logger.info("ignored");
    let out = buffer.contents();
    let year: i32 = out.trim_end().parse().unwrap();
    assert!(year >= 2024);
}

#[test]
fn invalid_settings_are_rejected() {
    let logger = Logger::new();
    assert!(matches!(
        logger.set_level(Level::Unknown),
        Err(Error::InvalidLevel(_))
    ));
    assert!(matches!(
        logger.set_time_format("%"),
        Err(Error::InvalidTimeFormat(_))
    ));
}

#[test]
fn discard_sink_skips_everything() {
    let logger = Logger::new();
    logger.set_output(io::sink());
    logger.set_template_formatter(|_| panic!("formatter must not run"));
    logger.error("dropped");
    assert!(logger.log(Level::Panic, "dropped").is_ok());
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_errors_propagate_unchanged() {
    let logger = Logger::new();
    logger.set_output(FailingSink);
    let err = logger.log(Level::Error, "x").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(err.to_string(), "closed");

    // Gated calls never reach the sink.
    assert!(logger.log(Level::Debug, "x").is_ok());
}

#[test]
#[should_panic(expected = "boom 7")]
fn panic_logs_then_panics() {
    let (logger, _buffer) = logger_with_buffer();
    logger.panicf(format_args!("boom {}", 7));
}

#[test]
fn panic_writes_before_unwinding() {
    let (logger, buffer) = logger_with_buffer();
    logger.set_template(Template::parse("${level}${message}"));
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panic("p");
    }));
    assert!(result.is_err());
    assert_eq!(buffer.contents(), "PANIC     p\n");
}

#[test]
fn panic_happens_even_when_gated() {
    let logger = Logger::new();
    logger.set_output(io::sink());
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panic("quiet");
    }));
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("quiet"));
}

#[test]
fn builder_applies_every_setting() {
    let buffer = Buffer::new();
    let logger = Logger::builder()
        .level(Level::Warning)
        .output(buffer.clone())
        .template(Template::parse("${prefix}:${level}:${message}"))
        .prefix("p")
        .time_format("%s")
        .build()
        .unwrap();

    assert_eq!(logger.level(), Level::Warning);
    assert_eq!(logger.time_format(), "%s");
    logger.debug("no");
    logger.warning("yes");
    assert_eq!(buffer.contents(), "p:WARNING   :yes\n");
}

#[test]
fn builder_validates() {
    assert!(Logger::builder().level(Level::Unknown).build().is_err());
    assert!(Logger::builder().time_format("%").build().is_err());

    let logger = Logger::builder().template(Template::parse("")).build().unwrap();
    assert_eq!(logger.template(), Template::default());

    let logger = Logger::builder().output(io::sink()).build().unwrap();
    assert!(logger.is_discard());
}

#[test]
fn builder_formatter() {
    let buffer = Buffer::new();
    let logger = Logger::builder()
        .output(buffer.clone())
        .formatter(|r| format!("{}={}", r.level.rank(), r.message))
        .build()
        .unwrap();
    logger.error("e");
    assert_eq!(buffer.contents(), "4=e\n");
}
