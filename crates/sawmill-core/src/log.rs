//! Logger construction from a [`LogConfig`].
//!
//! The pipeline is assembled in three steps: a size-rotated file sink
//! (rotation, backup count, and compression are owned by the rotation
//! library), a non-blocking writer draining to it from a background
//! thread, and a `tracing` fmt subscriber rendering ISO-8601 timestamps,
//! level, target, and caller `file:line` for every entry.
//!
//! [`build`] returns the pipeline as a scoped [`Dispatch`] so tests and
//! embedders can install it locally; [`init`] installs it process-wide,
//! exactly once.

use logroller::{Compression, LogRollerBuilder, Rotation, RotationSize};
use sawmill_types::{LogConfig, LogFormat, LogLevel, Result, SawmillError};
use std::path::Path;
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;

use crate::{config, retention};

/// Size threshold applied when the configuration leaves `maxsize` at
/// zero, matching the rotation default the original sink used.
const DEFAULT_MAX_SIZE_MB: u64 = 100;

/// Keeps the background log writer alive.
///
/// Dropping the guard flushes buffered entries and stops the writer
/// thread. Hold it for as long as the logger is in use, typically for
/// the remainder of the process.
pub struct LogGuard {
    _worker: WorkerGuard,
}

impl std::fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogGuard").finish_non_exhaustive()
    }
}

/// Map a severity to the filter applied to the subscriber.
///
/// Total: every [`LogLevel`] has a threshold. `fatal` has no counterpart
/// in the tracing ecosystem and thresholds as `error`.
pub fn threshold(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error | LogLevel::Fatal => LevelFilter::ERROR,
    }
}

/// Build the rotating file sink described by the configuration.
fn rotating_writer(config: &LogConfig) -> Result<logroller::LogRoller> {
    let file_name = config.filename.file_name().ok_or_else(|| {
        SawmillError::Construction(format!(
            "log path '{}' has no file name component",
            config.filename.display()
        ))
    })?;
    let directory = match config.filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|e| {
        SawmillError::Construction(format!(
            "cannot create log directory '{}': {}",
            directory.display(),
            e
        ))
    })?;

    let max_size = if config.max_size == 0 {
        DEFAULT_MAX_SIZE_MB
    } else {
        config.max_size
    };

    let mut builder = LogRollerBuilder::new(directory, Path::new(file_name))
        .rotation(Rotation::SizeBased(RotationSize::MB(max_size)));
    if config.max_backups > 0 {
        builder = builder.max_keep_files(config.max_backups);
    }
    if config.compress {
        builder = builder.compression(Compression::Gzip);
    }

    builder
        .build()
        .map_err(|e| SawmillError::Construction(e.to_string()))
}

/// Construct the logging pipeline without installing it.
///
/// This is the dependency-injection surface: the returned [`Dispatch`]
/// can be scoped with `tracing::dispatcher::with_default`, so each test
/// or embedder gets its own instance. Rotated files past the configured
/// retention age are pruned as a side effect.
///
/// # Errors
///
/// Returns [`SawmillError::Construction`] when the sink cannot be set up.
pub fn build(config: &LogConfig) -> Result<(Dispatch, LogGuard)> {
    let writer = rotating_writer(config)?;
    let (non_blocking, worker) = tracing_appender::non_blocking(writer);

    if config.max_age > 0 {
        retention::sweep(&config.filename, config.max_age);
    }

    let level = threshold(config.level());
    let dispatch = match config.format {
        LogFormat::Console => {
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .finish();
            Dispatch::new(subscriber)
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_max_level(level)
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .finish();
            Dispatch::new(subscriber)
        }
    };

    Ok((dispatch, LogGuard { _worker: worker }))
}

/// Construct the logging pipeline and install it process-wide.
///
/// After this returns, the `tracing` macros (`debug!` through `error!`)
/// emit through the configured file sink from any thread.
///
/// # Errors
///
/// Returns [`SawmillError::Construction`] when the sink cannot be set up
/// or when a global logger is already installed; initialization never
/// silently replaces a live pipeline.
pub fn init(config: &LogConfig) -> Result<LogGuard> {
    let (dispatch, guard) = build(config)?;
    tracing::dispatcher::set_global_default(dispatch).map_err(|_| {
        SawmillError::Construction("a global logger is already installed".to_string())
    })?;
    Ok(guard)
}

/// Load the configuration at `path` and install the logger it describes.
///
/// On a load failure the error propagates and no process-wide state is
/// touched.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<LogGuard> {
    let config = config::load(path)?;
    init(&config)
}
