use crate::error::PortalError;
use std::env;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_PATH_VAR: &str = "ARCADE_LOG";
const LOG_LEVEL_VAR: &str = "ARCADE_LOG_LEVEL";
const DEFAULT_LEVEL: &str = "info";

/// Installs a file-backed subscriber when `ARCADE_LOG` is set.
///
/// The games own the terminal in raw mode, so nothing is ever written to
/// stdout or stderr. Without `ARCADE_LOG` every event is dropped.
pub fn init() -> Result<(), PortalError>
{
    let Ok(path) = env::var(LOG_PATH_VAR) else {
        return Ok(());
    };
    if path.trim().is_empty() {
        return Ok(());
    }

    let file = File::create(&path).map_err(|source| PortalError::LogFile {
        path: path.clone(),
        source,
    })?;
    let filter = EnvFilter::try_from_env(LOG_LEVEL_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // A second init (tests, repeated launches) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::info!(path = %path, "logging enabled");
    Ok(())
}
