//! Interactive mode: read block names line by line from standard input.
//!
//! Every line is handled like a command-line batch. The session ends at end
//! of input, or as soon as a batch reports any failure.

use std::sync::Arc;

#[cfg(feature = "interactive")]
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
#[cfg(feature = "interactive")]
use tracing::{debug, info, instrument};

use mkblock_core::application::BlockService;

#[cfg(feature = "interactive")]
use crate::commands::batch::run_batch;
use crate::{
    error::{CliError, CliResult},
    report::Reporter,
};

#[cfg(feature = "interactive")]
pub const PROMPT: &str = "Block(s) name: ";

/// Owns the input reader for one interactive session.
///
/// Created at startup and closed exactly once, either at end of input or
/// on the first reported error.
#[cfg(feature = "interactive")]
pub struct InteractiveSession<R> {
    lines: Option<Lines<R>>,
}

#[cfg(feature = "interactive")]
impl<R> InteractiveSession<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: Some(reader.lines()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.lines.is_some()
    }

    /// Next input line, or `None` once input is exhausted or the session is closed.
    pub async fn next_line(&mut self) -> CliResult<Option<String>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        match lines.next_line().await {
            Ok(Some(line)) => Ok(Some(line)),
            Ok(None) => {
                self.close();
                Ok(None)
            }
            Err(e) => {
                self.close();
                Err(CliError::IoError {
                    message: "failed to read block names from standard input".into(),
                    source: e,
                })
            }
        }
    }

    /// Drop the reader. Later calls are no-ops.
    pub fn close(&mut self) {
        if self.lines.take().is_some() {
            debug!("Interactive session closed");
        }
    }
}

/// Prompt, read, and run batches until the session ends.
#[cfg(feature = "interactive")]
#[instrument(skip_all)]
pub async fn run_session<R>(
    session: &mut InteractiveSession<R>,
    service: &Arc<BlockService>,
    reporter: &Reporter,
) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
{
    while session.is_open() {
        reporter.output().prompt(PROMPT)?;

        let Some(line) = session.next_line().await? else {
            break;
        };

        let summary = run_batch(service, &line, reporter).await?;
        if !summary.is_success() {
            info!(failures = summary.failures.len(), "Ending session after failed batch");
            session.close();
            return summary.into_result();
        }
    }

    Ok(())
}

/// Execute interactive mode on standard input.
#[cfg(feature = "interactive")]
pub async fn execute(service: &Arc<BlockService>, reporter: &Reporter) -> CliResult<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = InteractiveSession::new(stdin);
    run_session(&mut session, service, reporter).await
}

#[cfg(not(feature = "interactive"))]
pub async fn execute(_service: &Arc<BlockService>, _reporter: &Reporter) -> CliResult<()> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
