//! Tracing setup for the binary.
//!
//! Logs go to stderr so they never mix with the block report on stdout.
//! Without `RUST_LOG`, the level follows the flags: `--quiet` gives ERROR,
//! no flag WARN, and each `-v` one step more (INFO, DEBUG, TRACE).

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const TARGETS: [&str; 3] = ["mkblock", "mkblock_core", "mkblock_adapters"];

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => target_filter(level_for(args))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Everything off except [`TARGETS`] at `level`.
fn target_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    TARGETS.iter().try_fold(EnvFilter::new("off"), |filter, target| {
        Ok(filter.add_directive(format!("{target}={level}").parse()?))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            blocks_dir: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(level_for(&args_with(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_adds_a_level() {
        assert_eq!(level_for(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args_with(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(level_for(&args_with(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn filter_names_every_crate() {
        let filter = target_filter(LevelFilter::DEBUG).unwrap().to_string();
        for target in TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }
}
