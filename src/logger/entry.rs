//! Severity entry points. Each level comes in three shapes: `info(value)`,
//! `infoln(value)` which appends a newline to the message, and `infof(args)` for
//! `format_args!`. All are `#[track_caller]`, so `${caller}` names the line that
//! called them.

use super::Logger;
use crate::level::Level;
use std::fmt::{self, Display};
use std::panic::Location;
use std::process;

/// Gated levels skip formatting entirely when the call would be dropped.
macro_rules! entry_points {
    ($level:expr, $plain:ident, $ln:ident, $f:ident, $doc:literal) => {
        #[doc = $doc]
        #[track_caller]
        pub fn $plain(&self, msg: impl Display) {
            if self.enabled($level) {
                let _ = self.write($level, Location::caller(), &msg.to_string());
            }
        }

        #[doc = $doc]
        ///
        /// Appends a newline to the message; the write then adds none of its own.
        #[track_caller]
        pub fn $ln(&self, msg: impl Display) {
            if self.enabled($level) {
                let _ = self.write($level, Location::caller(), &format!("{msg}\n"));
            }
        }

        #[doc = $doc]
        ///
        /// Takes `format_args!` output; nothing is formatted when the call is gated.
        #[track_caller]
        pub fn $f(&self, args: fmt::Arguments<'_>) {
            if self.enabled($level) {
                let _ = self.write($level, Location::caller(), &args.to_string());
            }
        }
    };
}

impl Logger {
    entry_points!(Level::Debug, debug, debugln, debugf, "Development diagnostics.");
    entry_points!(
        Level::Warning,
        warning,
        warningln,
        warningf,
        "Anomalies that do not stop anything."
    );
    entry_points!(Level::Info, info, infoln, infof, "Normal operational milestones.");
    entry_points!(Level::Error, error, errorln, errorf, "Failure of a single operation.");

    /// Logs, then exits the process with status 1. The exit happens even when the
    /// call was gated and nothing was written.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) -> ! {
        self.terminate(Location::caller(), &msg.to_string())
    }

    /// Like `fatal`, with a newline appended to the message.
    #[track_caller]
    pub fn fatalln(&self, msg: impl Display) -> ! {
        self.terminate(Location::caller(), &format!("{msg}\n"))
    }

    /// Like `fatal`, taking `format_args!` output.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(Location::caller(), &args.to_string())
    }

    /// Logs, then panics with the message. Like `fatal`, the panic does not
    /// depend on the call passing the level gate.
    #[track_caller]
    pub fn panic(&self, msg: impl Display) -> ! {
        let msg = msg.to_string();
        let _ = self.write(Level::Panic, Location::caller(), &msg);
        panic!("{msg}")
    }

    /// Like `panic`, with a newline appended to the message. The panic payload
    /// carries the newline too.
    #[track_caller]
    pub fn panicln(&self, msg: impl Display) -> ! {
        let msg = format!("{msg}\n");
        let _ = self.write(Level::Panic, Location::caller(), &msg);
        panic!("{msg}")
    }

    /// Like `panic`, taking `format_args!` output.
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        let _ = self.write(Level::Panic, Location::caller(), &msg);
        panic!("{msg}")
    }

    fn terminate(&self, caller: &'static Location<'static>, msg: &str) -> ! {
        let _ = self.write(Level::Fatal, caller, msg);
        let _ = self.flush();
        process::exit(1)
    }
}
