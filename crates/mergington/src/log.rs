pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Setup the logging system for the application.
/// This function will install the [`color_eyre`] error reporting system
/// and the [`tracing-subscriber`] logging system.
/// If `RUST_LIB_BACKTRACE` or `RUST_LOG` are unset they get sensible defaults,
/// with request tracing and the backend at `debug`.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    // Get / set backtrace
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    // Install color_eyre
    color_eyre::install().map_err(|e: color_eyre::Report| LogError::ColorEyre(e))?;

    // Get/set the log level
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var(
                "RUST_LOG",
                "info,tower_http=debug,mergington_backend=debug",
            )
        }
    }
    // Setup tracing and tracing-subscriber
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
