//! # Sawmill Core
//!
//! Configuration loading and logger construction for sawmill.
//!
//! This crate turns a YAML logging configuration into a ready-to-use
//! `tracing` pipeline:
//!
//! - **Loading**: [`config::load`] reads and parses a [`LogConfig`]
//! - **Construction**: [`log::build`] wires a size-rotated file sink
//!   behind a non-blocking writer and returns a scoped dispatcher
//! - **Installation**: [`log::init`] / [`log::init_from_file`] install
//!   the pipeline process-wide, exactly once
//! - **Retention**: rotated files past their configured age are pruned
//!   at initialization
//!
//! ## Example
//!
//! ```no_run
//! fn main() -> sawmill_core::Result<()> {
//!     // The guard flushes buffered entries when dropped; hold it for
//!     // the life of the process.
//!     let _guard = sawmill_core::init_from_file("logger.yaml")?;
//!
//!     tracing::info!("logger ready");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod retention;

// Re-export commonly used items
pub use log::{build, init, init_from_file, LogGuard};
pub use sawmill_types::{LogConfig, LogFormat, LogLevel, Result, SawmillError};

/// Sawmill version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
