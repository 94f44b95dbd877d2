//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events by level
/// 2. Formats them with the `fmt` layer
/// 3. Writes to stderr, or to a rotating file when `config.log_file` is set
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable if set and valid
/// 2. `config.log_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if it doesn't exist
/// - Falls back to stderr if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use connections::observability::init_tracing;
/// use connections::Config;
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.log_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_writer = config.log_file.as_ref().and_then(|path| {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).ok()?;
        }
        Some(FileWriter::new(path.clone()))
    });

    match file_writer {
        Some(writer) => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
    }
}
