// src/run.rs

use pathrel::Relativizer;
use std::io;
use thiserror::Error;
use tracing::info;
use tracing::subscriber::with_default;

use crate::config::RelConfig;
use logging::subscriber;

/// Failure of [`relativize_with_config`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Path(#[from] pathrel::Error),
    #[error("cannot set up logging: {0}")]
    Logging(#[source] io::Error),
}

/// Relative path from `relative_to` to `path` under `cfg`'s platform and
/// base, logging through a subscriber scoped to this call.
///
/// # Errors
///
/// [`RunError::Path`] for anything [`Relativizer::relative_path`] reports,
/// [`RunError::Logging`] when the log file cannot be opened.
pub fn relativize_with_config(
    relative_to: &str,
    path: &str,
    cfg: &RelConfig,
) -> Result<String, RunError> {
    let sub = subscriber(cfg.subscriber_config()).map_err(RunError::Logging)?;
    with_default(sub, || -> Result<String, RunError> {
        let rel = match &cfg.base {
            Some(base) => Relativizer::new(cfg.platform, base.as_str())?,
            None => Relativizer::current(cfg.platform)?,
        };
        let relative = rel.relative_path(relative_to, path)?;
        info!(
            op = "relative",
            from = relative_to,
            to = path,
            relative = %relative,
            "computed"
        );
        Ok(relative)
    })
}
