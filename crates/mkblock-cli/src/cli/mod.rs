//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::Parser;
use clap_complete::Shell;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "mkblock",
    bin_name = "mkblock",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold front-end blocks (markup, stylesheet, script)",
    long_about = "mkblock creates one directory per block under the blocks \
                  directory, holding <name>.html, <name>.scss and <name>.js \
                  generated from the built-in templates.\n\n\
                  Without block names it starts an interactive prompt.",
    after_help = "EXAMPLES:\n\
        \x20 mkblock header\n\
        \x20 mkblock header footer main-nav\n\
        \x20 mkblock --blocks-dir src/blocks card\n\
        \x20 mkblock                       # interactive: Block(s) name:\n\
        \x20 mkblock --completions bash > /usr/share/bash-completion/completions/mkblock",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Names of the blocks to create.
    ///
    /// All names are joined with spaces and split again, so quoting several
    /// names as one argument works too. Allowed characters: letters, digits,
    /// '_' and '-'. Use `--` before a name that starts with '-'.
    #[arg(value_name = "BLOCK")]
    pub names: Vec<String>,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "names")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Every positional argument joined with single spaces.
    pub fn joined_names(&self) -> String {
        self.names.join(" ")
    }

    /// No names given, or only an empty one: read them interactively.
    pub fn is_interactive(&self) -> bool {
        self.joined_names().is_empty()
    }
}
