// crates/logging/src/subscriber.rs
#![allow(missing_docs)]

use crate::flags::{LogFormat, SubscriberConfig};
use crate::formatter::RelpathFormatter;
use crate::sink::{FileWriter, LogWriter};
use std::fs::OpenOptions;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{
    EnvFilter, Layer, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

pub(crate) fn level_for(verbose: u8, quiet: bool, debug_flags: bool) -> LevelFilter {
    let level = if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    if !quiet && debug_flags && level < LevelFilter::DEBUG {
        LevelFilter::DEBUG
    } else {
        level
    }
}

/// Build a [`tracing`] subscriber from `cfg`.
///
/// Console output goes to stderr. `RUST_LOG` directives are layered on top
/// of the level derived from `verbose`/`quiet`, and each debug flag enables
/// its target down to TRACE.
pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        debug,
        quiet,
        log_file,
        colored,
        timestamps,
    } = cfg;

    let level = level_for(verbose, quiet, !debug.is_empty());
    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if !quiet {
        for flag in &debug {
            let directive: Directive = format!("{}=trace", flag.target())
                .parse()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            filter = filter.add_directive(directive);
        }
    }

    let base = tracing_fmt::layer()
        .with_writer(LogWriter)
        .with_target(false)
        .with_level(false)
        .with_ansi(colored);
    let fmt_layer = if timestamps {
        match format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Text => base.event_format(RelpathFormatter::new(None)).boxed(),
        }
    } else {
        let base = base.without_time();
        match format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Text => base.event_format(RelpathFormatter::new(None)).boxed(),
        }
    };

    let file_layer = if let Some((path, fmt)) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let base = tracing_fmt::layer()
            .with_writer(FileWriter { file })
            .with_ansi(false);
        let layer = match fmt.as_deref() {
            Some("json") => base.json().boxed(),
            Some(spec) => base
                .event_format(RelpathFormatter::new(Some(spec.to_string())))
                .boxed(),
            None => base.event_format(RelpathFormatter::new(None)).boxed(),
        };
        Some(layer)
    } else {
        None
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer);
    Ok(Box::new(registry))
}

/// Initialise the global [`tracing`] subscriber.
pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?.init();
    Ok(())
}
