//! Built-in templates for new blocks.
//!
//! The markup template carries `@@if(context.*){...}` directives meant for the
//! project's HTML include step; they are written out untouched.

use mkblock_core::domain::{BlockTemplate, TemplateSet};

/// Markup: block root element with optional extra class and style modifier.
pub const MARKUP: BlockTemplate = BlockTemplate::new_static(
    "html",
    "<div class=\"{blockName}@@if(context.class){ @@class}@@if(context.style){ {blockName}--style_@@style}\">\n  <!--your code-->\n</div>\n",
);

pub const STYLESHEET: BlockTemplate =
    BlockTemplate::new_static("scss", ".{blockName} {\n  // your code\n}\n");

pub const SCRIPT: BlockTemplate = BlockTemplate::new_static(
    "js",
    "app.yourScriptName = {\n  name: 'yourScriptName',\n  description: 'your script description',\n  init() {\n    // your code\n  },\n};\n",
);

/// The template set every block is generated from.
pub fn builtin_template_set() -> TemplateSet {
    TemplateSet {
        markup: MARKUP,
        stylesheet: STYLESHEET,
        script: SCRIPT,
    }
}
