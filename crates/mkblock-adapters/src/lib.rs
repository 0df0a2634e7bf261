//! Infrastructure adapters for mkblock.
//!
//! This crate implements the ports defined in `mkblock-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_templates::builtin_template_set;
pub use filesystem::{FailOn, LocalFilesystem, MemoryFilesystem};
