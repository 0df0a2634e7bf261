//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// Regular output goes to stdout; errors go to stderr so they stay visible
/// when stdout is redirected.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    error_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let no_color =
            args.no_color || config.output.no_color || resolved_format != OutputFormat::Human;
        let err_term = Term::stderr();

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color,
            error_color: error_color(no_color, err_term.is_term()),
            term: Term::stdout(),
            err_term,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Green bold message, no glyph; suppressed in quiet mode.
    pub fn highlight(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.supports_color() {
            msg.green().bold().to_string()
        } else {
            msg.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Dimmed message; suppressed in quiet mode.
    pub fn dimmed(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            msg.to_owned()
        } else {
            msg.dimmed().to_string()
        };
        self.term.write_line(&line)
    }

    /// Error line on stderr.  *Not* suppressed in quiet mode — errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.error_color {
            msg.red().to_string()
        } else {
            msg.to_owned()
        };
        self.err_term.write_line(&line)
    }

    /// Write `text` without a newline and flush, for input prompts.
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_str(text)?;
        self.term.flush()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Errors are coloured only when colour is enabled and stderr is a terminal.
fn error_color(no_color: bool, stderr_is_term: bool) -> bool {
    !no_color && stderr_is_term
}

// ── tests ─────────────────────────────────────────────────────────────────────
