//! Progress reporting for TTY and non-TTY environments.
//!
//! TTY mode: one indicatif bar per pipeline stage.
//! Non-TTY mode: hidden bars, messages go to stdout as plain lines so they
//! can be piped.

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Counted bar for items (datasets, citations)
fn item_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:<20.dim} [{elapsed_precise}] {bar:30.cyan/blue} {pos:>4}/{len:4} {eta:>4} {wide_msg:.dim}",
    )
    .expect("invalid template")
    .progress_chars("##-")
}

/// Central progress context managing the multi-progress area.
pub struct ProgressContext {
    multi: MultiProgress,
    is_tty: bool,
}

impl ProgressContext {
    /// Create new context, detecting TTY automatically.
    pub fn new() -> Self {
        Self::with_tty(std::io::stderr().is_terminal())
    }

    /// Create a context with an explicit TTY decision (tests, `--no-progress`).
    pub fn with_tty(is_tty: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            is_tty,
        }
    }

    /// Create a counted bar over `len` items.
    ///
    /// TTY: visible bar labeled with `name`.
    /// Non-TTY: hidden (no-op).
    pub fn item_bar(&self, name: &str, len: usize) -> ProgressBar {
        if !self.is_tty {
            return ProgressBar::hidden();
        }
        let pb = self.multi.add(ProgressBar::new(len as u64));
        pb.set_style(item_style());
        // Truncate long labels to keep bars aligned
        let display: String = name.chars().take(20).collect();
        pb.set_prefix(display);
        pb
    }

    /// Print a user-facing line.
    ///
    /// TTY: above managed progress bars (avoids interference).
    /// Non-TTY: plain line on stdout.
    pub fn println(&self, msg: impl AsRef<str>) {
        if self.is_tty {
            let _ = self.multi.println(msg);
        } else {
            let _ = write_line(&mut std::io::stdout().lock(), msg.as_ref());
        }
    }

    /// Whether running in TTY mode.
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    /// Get reference to `MultiProgress` for log bridge.
    pub fn multi(&self) -> &MultiProgress {
        &self.multi
    }
}

impl Default for ProgressContext {
    fn default() -> Self {
        Self::new()
    }
}

fn write_line(out: &mut impl Write, msg: &str) -> std::io::Result<()> {
    writeln!(out, "{msg}")?;
    out.flush()
}

/// Thread-safe wrapper for `ProgressContext`.
pub type SharedProgress = Arc<ProgressContext>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tty_bar_is_hidden() {
        let ctx = ProgressContext::with_tty(false);
        let pb = ctx.item_bar("Processing Datasets", 10);
        assert!(pb.is_hidden());
        pb.inc(1);
        pb.finish_and_clear();
    }

    #[test]
    fn tty_bar_has_length() {
        let ctx = ProgressContext::with_tty(true);
        let pb = ctx.item_bar("Processing Datasets", 7);
        assert_eq!(pb.length(), Some(7));
        assert_eq!(pb.prefix(), "Processing Datasets");
        pb.finish_and_clear();
    }

    #[test]
    fn long_prefix_is_truncated() {
        let ctx = ProgressContext::with_tty(true);
        let pb = ctx.item_bar("a very long stage name that overflows", 1);
        assert_eq!(pb.prefix().chars().count(), 20);
        pb.finish_and_clear();
    }

    #[test]
    fn println_non_tty_does_not_panic() {
        ProgressContext::with_tty(false).println("No datasets found for the given query.");
    }

    #[test]
    fn plain_line_is_newline_terminated() {
        let mut out = Vec::new();
        write_line(&mut out, "Enriched data saved to data/datasets_q.json").unwrap();
        assert_eq!(out, b"Enriched data saved to data/datasets_q.json\n");
    }
}
