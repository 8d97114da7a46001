//! Colored terminal output for generation runs.
//!
//! User-facing progress is kept separate from `log` diagnostics: the
//! former always reflects what the run produced, the latter is opt-in
//! via `RUST_LOG`.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Consistent colored output for the CLI.
///
/// Quiet mode suppresses everything except errors; verbose mode
/// additionally surfaces per-file detail. Terminal write failures are
/// deliberately swallowed: progress output must never abort a run.
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    fn marked(&self, marker: &str, color: Color, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(&mut buffer, "{marker}");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        let _ = self.stdout.print(&buffer);
    }

    /// Informational progress line.
    pub fn info(&self, message: &str) {
        self.marked("ℹ", Color::Cyan, message);
    }

    /// Completed step.
    pub fn success(&self, message: &str) {
        self.marked("✓", Color::Green, message);
    }

    /// Non-fatal problem.
    pub fn warn(&self, message: &str) {
        self.marked("⚠", Color::Yellow, message);
    }

    /// Fatal problem. Always shown, on stderr.
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(&mut buffer, "✗");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        let _ = stderr.print(&buffer);
    }

    /// Per-file detail, shown only with `--verbose`.
    pub fn detail(&self, message: &str) {
        if !self.verbose {
            return;
        }
        self.marked("→", Color::Blue, message);
    }

    /// Section header for a platform.
    pub fn section(&self, title: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = writeln!(&mut buffer);
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        let _ = writeln!(&mut buffer, "═══ {title} ═══");
        let _ = buffer.reset();
        let _ = self.stdout.print(&buffer);
    }

    /// Indented sub-item.
    pub fn indent(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = writeln!(&mut buffer, "    {message}");
        let _ = self.stdout.print(&buffer);
    }

    /// Plain line, suppressed in quiet mode.
    pub fn println(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut buffer = self.stdout.buffer();
        let _ = writeln!(&mut buffer, "{message}");
        let _ = self.stdout.print(&buffer);
    }
}
