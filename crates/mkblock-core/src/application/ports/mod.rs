//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `mkblock-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!
//! - **Driving (Input) Ports**: the batch and interactive drivers in the CLI

pub mod output;

pub use output::Filesystem;
