//! mkblock Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mkblock
//! block scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mkblock-cli (CLI)             │
//! │   (batch + interactive drivers, report) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (BlockService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mkblock-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │      (BlockName, TemplateSet, ...)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mkblock_core::application::BlockService;
//!
//! # async fn demo(filesystem: Arc<dyn mkblock_core::application::Filesystem>,
//! #               templates: mkblock_core::domain::TemplateSet) {
//! let service = BlockService::new(filesystem, templates, "app/blocks");
//! let created = service.make_block("header").await.unwrap();
//! for file in &created.files {
//!     println!("{file}");
//! }
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{BlockService, CreatedBlock, Filesystem, split_block_names};
    pub use crate::domain::{BlockName, BlockTemplate, PLACEHOLDER, TemplateSet};
    pub use crate::error::{BlockError, BlockResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
