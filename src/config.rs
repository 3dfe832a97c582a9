// src/config.rs

use logging::{DebugFlag, LogFormat, SubscriberConfig};
use pathrel::Platform;
use std::path::PathBuf;

/// Settings for [`relativize_with_config`](crate::relativize_with_config).
#[derive(Clone, Debug)]
pub struct RelConfig {
    pub platform: Platform,
    /// Directory relative operands resolve against; the working directory
    /// when unset.
    pub base: Option<String>,
    pub log_format: LogFormat,
    pub verbose: u8,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    pub log_file: Option<(PathBuf, Option<String>)>,
    pub colored: bool,
    pub timestamps: bool,
}

impl Default for RelConfig {
    fn default() -> Self {
        Self {
            platform: Platform::host(),
            base: None,
            log_format: LogFormat::Text,
            verbose: 0,
            debug: Vec::new(),
            quiet: false,
            log_file: None,
            colored: true,
            timestamps: false,
        }
    }
}

impl RelConfig {
    /// Create a new builder for [`RelConfig`].
    pub fn builder() -> RelConfigBuilder {
        RelConfigBuilder::default()
    }

    pub(crate) fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .debug(&self.debug)
            .quiet(self.quiet)
            .log_file(self.log_file.clone())
            .colored(self.colored)
            .timestamps(self.timestamps)
            .build()
    }
}

/// Builder for [`RelConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct RelConfigBuilder {
    cfg: RelConfig,
}

impl RelConfigBuilder {
    pub fn platform(mut self, platform: Platform) -> Self {
        self.cfg.platform = platform;
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.cfg.base = Some(base.into());
        self
    }

    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn debug<I>(mut self, debug: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DebugFlag>,
    {
        let mut debug = debug.into_iter().map(Into::into).collect::<Vec<_>>();
        debug.sort_by_key(|flag| flag.as_str());
        debug.dedup();
        self.cfg.debug = debug;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn log_file(mut self, log_file: Option<(PathBuf, Option<String>)>) -> Self {
        self.cfg.log_file = log_file;
        self
    }

    pub fn colored(mut self, enable: bool) -> Self {
        self.cfg.colored = enable;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.cfg.timestamps = enable;
        self
    }

    pub fn build(self) -> RelConfig {
        self.cfg
    }
}
