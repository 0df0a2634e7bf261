//! Batch mode: create every block named in one input string.
//!
//! Each name gets its own task. Tasks run concurrently on the runtime and are
//! reported as they finish, so report order follows completion order. A
//! failed pipeline never affects its siblings.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, instrument};

use mkblock_core::{
    application::{BlockService, CreatedBlock, split_block_names},
    error::BlockError,
};

use crate::{
    error::{CliError, CliResult},
    report::Reporter,
};

/// What happened to the names of one batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub created: Vec<CreatedBlock>,
    pub failures: Vec<BlockError>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.created.len() + self.failures.len()
    }

    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Ok` when every block was created, otherwise the first reported failure.
    pub fn into_result(self) -> CliResult<()> {
        let total = self.total();
        let failed = self.failures.len();
        match self.failures.into_iter().next() {
            None => Ok(()),
            Some(first) => Err(CliError::BlocksFailed {
                failed,
                total,
                first,
            }),
        }
    }
}

/// Execute batch mode for names given on the command line.
pub async fn execute(service: &Arc<BlockService>, input: &str, reporter: &Reporter) -> CliResult<()> {
    run_batch(service, input, reporter).await?.into_result()
}

/// Split `input` into names, run one pipeline per name, report each result.
#[instrument(skip(service, reporter))]
pub async fn run_batch(
    service: &Arc<BlockService>,
    input: &str,
    reporter: &Reporter,
) -> CliResult<BatchSummary> {
    let mut tasks = JoinSet::new();
    for name in split_block_names(input) {
        let service = Arc::clone(service);
        tasks.spawn(async move {
            let result = service.make_block(&name).await;
            (name, result)
        });
    }
    debug!(pipelines = tasks.len(), "Block pipelines started");

    let mut summary = BatchSummary::default();
    while let Some(joined) = tasks.join_next().await {
        let result = match joined {
            Ok((name, result)) => {
                debug!(block = %name, ok = result.is_ok(), "Block pipeline finished");
                result
            }
            Err(e) => Err(BlockError::Internal {
                message: format!("block task failed: {e}"),
            }),
        };

        match result {
            Ok(block) => {
                reporter.created(&block)?;
                summary.created.push(block);
            }
            Err(err) => {
                reporter.failed(&err)?;
                summary.failures.push(err);
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;
    use crate::output::OutputManager;

    use std::path::Path;

    use async_trait::async_trait;
    use mkblock_adapters::{MemoryFilesystem, builtin_template_set};
    use mkblock_core::application::{ApplicationError, Filesystem};
    use mkblock_core::error::BlockResult;

    /// Yields after every existence check so concurrent pipelines interleave
    /// between the check and the directory creation.
    #[derive(Clone)]
    struct InterleavingFilesystem(MemoryFilesystem);

    #[async_trait]
    impl Filesystem for InterleavingFilesystem {
        async fn exists(&self, path: &Path) -> bool {
            let found = self.0.exists(path).await;
            tokio::task::yield_now().await;
            found
        }

        async fn create_dir(&self, path: &Path) -> BlockResult<()> {
            self.0.create_dir(path).await
        }

        async fn write_file(&self, path: &Path, content: &str) -> BlockResult<()> {
            self.0.write_file(path, content).await
        }

        async fn list_dir(&self, path: &Path) -> BlockResult<Vec<String>> {
            self.0.list_dir(path).await
        }
    }

    fn reporter() -> Reporter {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            blocks_dir: None,
            output_format: OutputFormat::Plain,
        };
        Reporter::new(
            OutputManager::new(&args, &AppConfig::default()),
            std::path::Path::new("/app/blocks"),
        )
    }

    fn service(fs: &MemoryFilesystem) -> Arc<BlockService> {
        Arc::new(BlockService::new(
            Arc::new(fs.clone()),
            builtin_template_set(),
            "/app/blocks",
        ))
    }

    #[tokio::test]
    async fn every_name_gets_a_pipeline() {
        let fs = MemoryFilesystem::with_dir("/app/blocks");
        let summary = run_batch(&service(&fs), "alpha beta  gamma", &reporter())
            .await
            .unwrap();

        assert!(summary.is_success());
        let mut names: Vec<_> = summary.created.iter().map(|b| b.name.to_string()).collect();
        names.sort();
        assert_eq!(names, ["alpha", "beta", "gamma"]);
        assert!(fs.read_file("/app/blocks/gamma/gamma.scss").is_some());
    }

    #[tokio::test]
    async fn one_collision_does_not_stop_siblings() {
        let fs = MemoryFilesystem::with_dir("/app/blocks/beta");
        let summary = run_batch(&service(&fs), "alpha beta", &reporter())
            .await
            .unwrap();

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.created.len(), 1);
        assert_eq!(summary.created[0].name.as_str(), "alpha");
        assert!(matches!(
            summary.failures.as_slice(),
            [BlockError::Application(ApplicationError::BlockExists { .. })]
        ));
    }

    #[tokio::test]
    async fn failures_map_to_blocks_failed() {
        let fs = MemoryFilesystem::with_dir("/app/blocks");
        let summary = run_batch(&service(&fs), "ok bad!", &reporter())
            .await
            .unwrap();

        let err = summary.into_result().unwrap_err();
        assert!(matches!(
            err,
            CliError::BlocksFailed {
                failed: 1,
                total: 2,
                ..
            }
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn blank_input_is_one_invalid_name() {
        let fs = MemoryFilesystem::with_dir("/app/blocks");
        let summary = run_batch(&service(&fs), "   ", &reporter()).await.unwrap();
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.created.is_empty());
    }

    #[tokio::test]
    async fn repeated_name_loses_the_race_at_directory_creation() {
        let fs = MemoryFilesystem::with_dir("/app/blocks");
        let service = Arc::new(BlockService::new(
            Arc::new(InterleavingFilesystem(fs.clone())),
            builtin_template_set(),
            "/app/blocks",
        ));

        let summary = run_batch(&service, "foo foo", &reporter()).await.unwrap();

        assert_eq!(summary.created.len(), 1);
        assert_eq!(summary.created[0].name.as_str(), "foo");
        assert!(matches!(
            summary.failures.as_slice(),
            [BlockError::Application(ApplicationError::DirectoryCreate { .. })]
        ));
        assert!(fs.read_file("/app/blocks/foo/foo.js").is_some());
    }
}
