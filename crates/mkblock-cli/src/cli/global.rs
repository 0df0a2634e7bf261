//! Flags shared by batch and interactive mode.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour output (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from this file instead of the user config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Create blocks under DIR [default: app/blocks]
    #[arg(long, global = true, env = "MKBLOCK_BLOCKS_DIR", value_name = "DIR")]
    pub blocks_dir: Option<PathBuf>,

    /// How created blocks are reported
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// Coloured report
    Human,
    /// Report without colour
    Plain,
    /// One JSON object per created block
    Json,
}
