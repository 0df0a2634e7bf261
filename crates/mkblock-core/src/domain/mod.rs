//! Domain layer: block names and the template set.
//!
//! Pure logic only. Nothing here touches the filesystem or the runtime.

pub mod block_name;
pub mod error;
pub mod template;

pub use block_name::BlockName;
pub use error::DomainError;
pub use template::{BlockTemplate, PLACEHOLDER, RenderedFile, TemplateSet};
