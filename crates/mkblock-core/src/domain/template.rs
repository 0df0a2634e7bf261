//! Template set: the three files generated for every block.
//!
//! Rendering is literal substring substitution of [`PLACEHOLDER`]. Any other
//! markup in a template (for instance `@@if(context.class){...}` directives)
//! is opaque text for a downstream templating step and is copied verbatim.

use std::borrow::Cow;

use crate::domain::BlockName;

/// Token replaced by the block name in every template source.
pub const PLACEHOLDER: &str = "{blockName}";

/// One template: a file extension and the source text it is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTemplate {
    pub extension: Cow<'static, str>,
    pub source: Cow<'static, str>,
}

impl BlockTemplate {
    pub const fn new_static(extension: &'static str, source: &'static str) -> Self {
        Self {
            extension: Cow::Borrowed(extension),
            source: Cow::Borrowed(source),
        }
    }

    pub fn new(extension: impl Into<Cow<'static, str>>, source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            extension: extension.into(),
            source: source.into(),
        }
    }

    /// `<name>.<extension>`
    pub fn file_name(&self, name: &BlockName) -> String {
        format!("{}.{}", name, self.extension)
    }

    /// Replace every occurrence of [`PLACEHOLDER`] with `name`.
    pub fn render(&self, name: &BlockName) -> RenderedFile {
        RenderedFile {
            file_name: self.file_name(name),
            content: self.source.replace(PLACEHOLDER, name.as_str()),
        }
    }
}

/// Fixed mapping from file kind to template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub markup: BlockTemplate,
    pub stylesheet: BlockTemplate,
    pub script: BlockTemplate,
}

impl TemplateSet {
    /// Templates in generation order: markup, stylesheet, script.
    pub fn templates(&self) -> [&BlockTemplate; 3] {
        [&self.markup, &self.stylesheet, &self.script]
    }

    /// Render all three templates for `name`, in generation order.
    pub fn render(&self, name: &BlockName) -> [RenderedFile; 3] {
        self.templates().map(|template| template.render(name))
    }
}

/// A template rendered for a particular block, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub content: String,
}
