//! Structured logging built on `tracing`.
//!
//! Events and spans from the app layer, the worker and the collaborators flow
//! through a single `fmt` layer:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | FileWriter (rotating)
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` config option
//! 3. Default: `"info"`
//!
//! Setting `log_file` sends output to a file that rotates at 10MB with
//! 3-backup retention.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
