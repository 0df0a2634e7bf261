//! Application layer for mkblock.
//!
//! This layer contains:
//! - **Services**: the block pipeline (`BlockService`)
//! - **Ports**: the `Filesystem` trait implemented by adapters
//! - **Errors**: pipeline stage errors
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{BlockService, CreatedBlock, split_block_names};

pub use ports::Filesystem;

pub use error::ApplicationError;
