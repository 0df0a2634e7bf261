//! Block Service - the per-name scaffolding pipeline.
//!
//! Stages run strictly in order for one name:
//! 1. Validate the name
//! 2. Check that nothing exists at the target path
//! 3. Create the block directory
//! 4. Write the three rendered templates (together)
//! 5. Read the directory back for the report
//!
//! Any stage failure ends the pipeline for that name. Nothing is rolled back:
//! a failed write leaves the directory partially populated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{BlockName, RenderedFile, TemplateSet},
    error::BlockResult,
};

/// Outcome of a successful pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedBlock {
    pub name: BlockName,
    pub path: PathBuf,
    /// Entries found in the block directory after creation.
    pub files: Vec<String>,
}

/// Split raw input into candidate block names.
///
/// Input is trimmed and split on runs of whitespace. Blank input yields a
/// single empty candidate, which then fails validation.
pub fn split_block_names(input: &str) -> Vec<String> {
    let names: Vec<String> = input.split_whitespace().map(str::to_owned).collect();
    if names.is_empty() {
        vec![String::new()]
    } else {
        names
    }
}

/// Main scaffolding service.
///
/// Shared between concurrently running pipelines, so it is usually held in an
/// `Arc`.
pub struct BlockService {
    filesystem: Arc<dyn Filesystem>,
    templates: TemplateSet,
    blocks_root: PathBuf,
}

impl BlockService {
    /// Create a new block service writing under `blocks_root`.
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        templates: TemplateSet,
        blocks_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            templates,
            blocks_root: blocks_root.into(),
        }
    }

    pub fn blocks_root(&self) -> &Path {
        &self.blocks_root
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Directory a block with this name lives in.
    pub fn block_path(&self, name: &BlockName) -> PathBuf {
        self.blocks_root.join(name.as_str())
    }

    /// Run the full pipeline for one candidate name.
    #[instrument(skip(self), fields(root = %self.blocks_root.display()))]
    pub async fn make_block(&self, raw_name: &str) -> BlockResult<CreatedBlock> {
        let name = BlockName::parse(raw_name)?;
        let path = self.block_path(&name);

        self.ensure_absent(&name, &path).await?;

        self.filesystem.create_dir(&path).await?;
        debug!(path = %path.display(), "Block directory created");

        self.write_files(&name, &path).await?;

        let files = self.filesystem.list_dir(&path).await?;
        info!(block = %name, files = files.len(), "Block created");

        Ok(CreatedBlock { name, path, files })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    async fn ensure_absent(&self, name: &BlockName, path: &Path) -> BlockResult<()> {
        if self.filesystem.exists(path).await {
            return Err(ApplicationError::BlockExists {
                name: name.to_string(),
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Write every rendered template into `dir`.
    ///
    /// All writes are driven to completion even when one fails early; the
    /// first failure in template order is returned.
    async fn write_files(&self, name: &BlockName, dir: &Path) -> BlockResult<()> {
        let filesystem = &*self.filesystem;
        let write = |file: RenderedFile| {
            let path = dir.join(&file.file_name);
            async move { filesystem.write_file(&path, &file.content).await }
        };

        let [markup, stylesheet, script] = self.templates.render(name);
        let (markup, stylesheet, script) =
            tokio::join!(write(markup), write(stylesheet), write(script));

        markup.and(stylesheet).and(script)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::{BlockTemplate, DomainError};
    use crate::error::BlockError;

    fn templates() -> TemplateSet {
        TemplateSet {
            markup: BlockTemplate::new_static("html", "<div class=\"{blockName}\"></div>\n"),
            stylesheet: BlockTemplate::new_static("scss", ".{blockName} {}\n"),
            script: BlockTemplate::new_static("js", "// script\n"),
        }
    }

    fn service(mock: MockFilesystem) -> BlockService {
        BlockService::new(Arc::new(mock), templates(), "/blocks")
    }

    // ── split_block_names ─────────────────────────────────────────────────

    #[test]
    fn splits_on_any_whitespace_run() {
        assert_eq!(split_block_names("  alpha \t beta\ngamma  "), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn blank_input_yields_one_empty_candidate() {
        assert_eq!(split_block_names(""), [""]);
        assert_eq!(split_block_names("   "), [""]);
    }

    // ── make_block ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn invalid_name_touches_nothing() {
        // No expectations: any filesystem call panics.
        let svc = service(MockFilesystem::new());
        let err = svc.make_block("bad name!").await.unwrap_err();
        assert_eq!(
            err,
            BlockError::Domain(DomainError::InvalidBlockName { name: "bad name!".into() })
        );
    }

    #[tokio::test]
    async fn existing_path_is_a_collision_without_mutation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/blocks/foo"))
            .times(1)
            .returning(|_| true);
        fs.expect_create_dir().never();
        fs.expect_write_file().never();

        let err = service(fs).make_block("foo").await.unwrap_err();
        assert!(matches!(
            err,
            BlockError::Application(ApplicationError::BlockExists { ref name, .. }) if name == "foo"
        ));
    }

    #[tokio::test]
    async fn fresh_name_writes_three_rendered_files() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir()
            .withf(|p| p == Path::new("/blocks/foo"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(3).returning(move |path, content| {
            sink.lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_owned()));
            Ok(())
        });
        fs.expect_list_dir()
            .returning(|_| Ok(vec!["foo.html".into(), "foo.js".into(), "foo.scss".into()]));

        let created = service(fs).make_block("foo").await.unwrap();
        assert_eq!(created.name.as_str(), "foo");
        assert_eq!(created.path, PathBuf::from("/blocks/foo"));
        assert_eq!(created.files, ["foo.html", "foo.js", "foo.scss"]);

        let mut written = written.lock().unwrap().clone();
        written.sort();
        assert_eq!(
            written,
            [
                (PathBuf::from("/blocks/foo/foo.html"), "<div class=\"foo\"></div>\n".to_owned()),
                (PathBuf::from("/blocks/foo/foo.js"), "// script\n".to_owned()),
                (PathBuf::from("/blocks/foo/foo.scss"), ".foo {}\n".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn directory_create_failure_stops_the_pipeline() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir().returning(|p| {
            Err(ApplicationError::DirectoryCreate {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let err = service(fs).make_block("foo").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create a folder '/blocks/foo'");
    }

    #[tokio::test]
    async fn one_failed_write_fails_the_block_but_all_writes_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_write_file().times(3).returning(|path, _| {
            if path.extension().is_some_and(|ext| ext == "scss") {
                Err(ApplicationError::FileWrite {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_list_dir().never();

        let err = service(fs).make_block("foo").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create a file '/blocks/foo/foo.scss'");
    }

    #[tokio::test]
    async fn list_failure_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_list_dir().returning(|p| {
            Err(ApplicationError::ListFiles {
                path: p.to_path_buf(),
                reason: "not found".into(),
            }
            .into())
        });

        let err = service(fs).make_block("foo").await.unwrap_err();
        assert!(matches!(
            err,
            BlockError::Application(ApplicationError::ListFiles { .. })
        ));
    }
}
