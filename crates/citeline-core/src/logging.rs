//! Logging setup with indicatif integration

use indicatif::MultiProgress;

/// How chatty the logger is when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Info and above
    Normal,
    /// Everything down to debug (request URLs, per-citation lookups)
    Debug,
}

impl Verbosity {
    /// Resolve from CLI switches; `--debug` wins over quiet mode.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Default env_logger filter for this verbosity.
    pub fn default_filter(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Normal => "info",
            Self::Debug => "debug",
        }
    }
}

/// Padded label and optional ANSI color for a log level.
fn level_style(level: log::Level, color: bool) -> (&'static str, &'static str, &'static str) {
    let label = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    if !color {
        return ("", label, "");
    }
    let ansi = match level {
        log::Level::Error => "\x1b[31m",
        log::Level::Warn => "\x1b[33m",
        log::Level::Info => "\x1b[32m",
        log::Level::Debug => "\x1b[36m",
        log::Level::Trace => "\x1b[35m",
    };
    (ansi, label, "\x1b[0m")
}

/// Format one log line the way both backends print it.
fn format_line(level: log::Level, color: bool, args: &std::fmt::Arguments<'_>) -> String {
    let (pre, label, post) = level_style(level, color);
    format!("[{pre}{label}{post}] {args}")
}

/// Logger that prints through indicatif MultiProgress so log lines
/// do not tear the dataset progress bar.
pub struct IndicatifLogger {
    inner: env_logger::Logger,
    multi: MultiProgress,
}

impl IndicatifLogger {
    pub fn new(inner: env_logger::Logger, multi: MultiProgress) -> Self {
        Self { inner, multi }
    }
}

impl log::Log for IndicatifLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.inner.enabled(record.metadata()) {
            // Only installed in TTY mode, so color is always on
            let line = format_line(record.level(), true, record.args());
            self.multi.suspend(|| eprintln!("{line}"));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Initialize logging once per process.
///
/// With `multi` set (TTY), log lines go through the progress bars;
/// otherwise a plain `[LEVEL] message` format is used. `RUST_LOG`
/// overrides the verbosity default in both modes. Calling this twice is
/// harmless: the second logger is ignored.
pub fn init_logging(verbosity: Verbosity, multi: Option<&MultiProgress>) {
    use std::io::Write;

    let env = env_logger::Env::default().default_filter_or(verbosity.default_filter());

    if let Some(multi) = multi {
        let logger = env_logger::Builder::from_env(env).build();
        let max_level = logger.filter();
        if log::set_boxed_logger(Box::new(IndicatifLogger::new(logger, multi.clone()))).is_ok() {
            log::set_max_level(max_level);
        }
    } else {
        let _ = env_logger::Builder::from_env(env)
            .format(|buf, record| {
                writeln!(buf, "{}", format_line(record.level(), false, record.args()))
            })
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_debug_wins() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn verbosity_filters() {
        assert_eq!(Verbosity::Quiet.default_filter(), "warn");
        assert_eq!(Verbosity::Normal.default_filter(), "info");
        assert_eq!(Verbosity::Debug.default_filter(), "debug");
    }

    #[test]
    fn plain_line_has_no_ansi() {
        let line = format_line(log::Level::Warn, false, &format_args!("count failed"));
        assert_eq!(line, "[WARN ] count failed");
    }

    #[test]
    fn colored_line_wraps_label() {
        let line = format_line(log::Level::Error, true, &format_args!("boom"));
        assert_eq!(line, "[\x1b[31mERROR\x1b[0m] boom");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(Verbosity::Quiet, None);
        init_logging(Verbosity::Debug, None);
    }
}
