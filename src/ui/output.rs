//! ui::output
//!
//! User-facing messages and the verbosity that gates them.
//!
//! Status lines go to stdout and are dropped under `--quiet`. Warnings and
//! errors go to stderr; errors are never dropped. Diagnostic logging is
//! separate and goes through `tracing`, whose default filter is derived from
//! the same [`Verbosity`].

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `--quiet`: results only
    Quiet,
    #[default]
    Normal,
    /// `--debug`: diagnostics on stderr
    Debug,
}

impl Verbosity {
    /// `--quiet` wins over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }

    /// Default `tracing` filter for this verbosity (`RUST_LOG` overrides it).
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "itemlink=debug,warn",
        }
    }
}

/// Write `message` as a line unless quiet. Write errors are ignored; a
/// closed stdout must not turn a finished command into a failure.
fn status_to<W: Write>(out: &mut W, message: impl Display, verbosity: Verbosity) {
    if !verbosity.is_quiet() {
        let _ = writeln!(out, "{}", message);
    }
}

fn warn_to<W: Write>(out: &mut W, message: impl Display, verbosity: Verbosity) {
    if !verbosity.is_quiet() {
        let _ = writeln!(out, "warning: {}", message);
    }
}

fn error_to<W: Write>(out: &mut W, message: impl Display) {
    let _ = writeln!(out, "error: {}", message);
}

/// Status line on stdout (dropped when quiet).
pub fn print(message: impl Display, verbosity: Verbosity) {
    status_to(&mut io::stdout().lock(), message, verbosity);
}

/// Warning on stderr (dropped when quiet).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    warn_to(&mut io::stderr().lock(), message, verbosity);
}

/// Error on stderr (always shown).
pub fn error(message: impl Display) {
    error_to(&mut io::stderr().lock(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn log_filters() {
        assert_eq!(Verbosity::Quiet.log_filter(), "error");
        assert_eq!(Verbosity::Normal.log_filter(), "warn");
        assert!(Verbosity::Debug.log_filter().contains("itemlink=debug"));
    }

    #[test]
    fn quiet_drops_status_and_warnings() {
        let out = captured(|w| {
            status_to(w, "Logged out from github.com.", Verbosity::Quiet);
            warn_to(w, "token set in environment", Verbosity::Quiet);
        });
        assert!(out.is_empty());
    }

    #[test]
    fn prefixes() {
        let out = captured(|w| {
            status_to(w, "done", Verbosity::Normal);
            warn_to(w, "careful", Verbosity::Debug);
            error_to(w, "broken");
        });
        assert_eq!(out, "done\nwarning: careful\nerror: broken\n");
    }
}
