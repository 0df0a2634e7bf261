//! Application services - orchestrate use cases.

pub mod block_service;

pub use block_service::{BlockService, CreatedBlock, split_block_names};
