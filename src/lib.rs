// Chunk: docs/chunks/host_binary - Command-line host for the editor core

//! yeet: host-side pieces of the `yeet` binary.
//!
//! The editing core lives in `yeet-buffer` and `yeet-syntax`; this crate adds
//! the user configuration and the one-shot report the binary prints.

pub mod config;
pub mod host;

pub use config::Config;
pub use host::{report, Dump};
