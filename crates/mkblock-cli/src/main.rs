//! # mkblock CLI
//!
//! Scaffolds block directories (markup, stylesheet, script) for a front-end
//! component library.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env + flags).
//! 4. Build the [`Reporter`] and a current-thread tokio runtime.
//! 5. Run batch mode (names given) or interactive mode (no names).
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / filesystem error      |
//! |  2   | User / input error               |
//! |  4   | Configuration error              |
//!
//! A batch where any block failed exits with the code of the first failure
//! reported, in batch and interactive mode alike. Earlier releases of the
//! tool always exited 0; scripts that relied on that must now check the
//! status.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info, instrument};

use mkblock_adapters::{LocalFilesystem, builtin_template_set};
use mkblock_core::application::BlockService;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    report::Reporter,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod report;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        names = cli.names.len(),
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let mut config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, cli.global.verbose > 0);
        }
    };
    config.apply_overrides(&cli.global);

    // ── 4. Output + runtime ───────────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(e.into(), verbose),
    };

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match runtime.block_on(run(cli, config, output)) {
        Ok(()) => {
            info!("mkblock completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Pick batch or interactive mode and run it.
#[instrument(skip_all)]
async fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        return commands::completions::execute(shell);
    }

    info!(blocks_dir = %config.blocks.dir.display(), "Blocks directory resolved");

    let service = Arc::new(BlockService::new(
        Arc::new(LocalFilesystem::new()),
        builtin_template_set(),
        config.blocks.dir.clone(),
    ));
    let reporter = Reporter::new(output, &config.blocks.dir);

    if cli.is_interactive() {
        commands::interactive::execute(&service, &reporter).await
    } else {
        commands::batch::execute(&service, &cli.joined_names(), &reporter).await
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// Block failures were already printed by the reporter, so only their exit
/// code is applied here.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    if !err.is_reported() {
        let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        };
        eprint!("{msg}");
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
