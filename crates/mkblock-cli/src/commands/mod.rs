//! Command handlers.
//!
//! Each handler takes already-parsed arguments and shared services, does its
//! work, and returns a `CliResult`. No argument parsing happens here.

pub mod batch;
pub mod completions;
pub mod interactive;
