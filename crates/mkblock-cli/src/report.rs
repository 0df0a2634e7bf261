//! Per-block result reporting.
//!
//! A created block prints as
//!
//! ```text
//! -----------------------------------------------------
//! The block has just been created in 'app/blocks/alpha'
//! -----------------------------------------------------
//! alpha.html
//! alpha.js
//! alpha.scss
//! ```
//!
//! and a failure as a single `ERR>>> ` line on stderr.

use std::io;
use std::path::Path;

use mkblock_core::{application::CreatedBlock, error::BlockError};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::OutputManager;

/// Prefix of every per-block error line.
pub const ERROR_PREFIX: &str = "ERR>>> ";

/// Writes one report per finished block pipeline.
pub struct Reporter {
    output: OutputManager,
    root_display: String,
}

impl Reporter {
    /// `blocks_root` is shown as given in success messages.
    pub fn new(output: OutputManager, blocks_root: &Path) -> Self {
        let root_display = blocks_root
            .to_string_lossy()
            .trim_end_matches(['/', '\\'])
            .to_owned();
        Self {
            output,
            root_display,
        }
    }

    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    pub fn output(&self) -> &OutputManager {
        &self.output
    }

    /// Report a created block and the files found in it.
    pub fn created(&self, block: &CreatedBlock) -> CliResult<()> {
        if self.output.format() == OutputFormat::Json {
            self.output.print(&serde_json::to_string(block)?)?;
            return Ok(());
        }

        let message = creation_message(&self.root_display, block.name.as_str());
        let rule = delimiter(&message);

        self.output.dimmed(&rule)?;
        self.output.highlight(&message)?;
        self.output.dimmed(&rule)?;
        for file in &block.files {
            self.output.print(file)?;
        }
        Ok(())
    }

    /// Report a failed block pipeline.
    pub fn failed(&self, err: &BlockError) -> io::Result<()> {
        self.output.error(&error_line(err))
    }
}

/// `The block has just been created in '<root>/<name>'`
pub fn creation_message(root_display: &str, name: &str) -> String {
    format!("The block has just been created in '{root_display}/{name}'")
}

/// A rule of `-` as long as `message`.
pub fn delimiter(message: &str) -> String {
    "-".repeat(message.chars().count())
}

pub fn error_line(err: &BlockError) -> String {
    format!("{ERROR_PREFIX}{err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkblock_core::domain::DomainError;

    #[test]
    fn delimiter_is_48_plus_name_length_for_default_root() {
        for name in ["a", "alpha", "main-navigation_2"] {
            let message = creation_message("app/blocks", name);
            assert_eq!(delimiter(&message).len(), 48 + name.len());
        }
    }

    #[test]
    fn message_names_the_block_directory() {
        assert_eq!(
            creation_message("app/blocks", "foo"),
            "The block has just been created in 'app/blocks/foo'"
        );
    }

    #[test]
    fn delimiter_tracks_custom_roots() {
        let message = creation_message("src/ui/blocks", "foo");
        assert_eq!(delimiter(&message).len(), message.len());
    }

    #[test]
    fn error_lines_are_prefixed() {
        let err: BlockError = DomainError::InvalidBlockName { name: "a.b".into() }.into();
        let line = error_line(&err);
        assert!(line.starts_with("ERR>>> An incorrect block name 'a.b'"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn trailing_separator_is_dropped_from_root() {
        let args = crate::cli::GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            blocks_dir: None,
            output_format: OutputFormat::Plain,
        };
        let output = OutputManager::new(&args, &crate::config::AppConfig::default());
        let reporter = Reporter::new(output, Path::new("app/blocks/"));
        assert_eq!(reporter.root_display, "app/blocks");
    }
}
