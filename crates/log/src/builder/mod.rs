//! Logger builder implementation

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful install.
///
/// Dropping it does not uninstall the subscriber; it only records that the
/// owner is done with logging.
#[derive(Debug)]
#[must_use = "dropping the guard immediately ends the logging session"]
pub struct LoggerGuard {
    format: Format,
}

impl LoggerGuard {
    /// Format of the installed subscriber.
    pub fn format(&self) -> Format {
        self.format
    }
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        tracing::debug!(format = %self.format, "logging session ended");
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and initialize the logger
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = parse_filter(&self.config.level)?;
        let layer = fmt_layer(self.config.format, &self.config.display);

        Registry::default()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|_| LogError::AlreadyInitialized)?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger installed"
        );

        Ok(LoggerGuard {
            format: self.config.format,
        })
    }
}

fn parse_filter(level: &str) -> LogResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| LogError::Filter(format!("{level}: {e}")))
}

/// Creates the formatting layer for `format`.
///
/// Every combination has its own concrete type, so the layer is boxed.
fn fmt_layer<S>(format: Format, display: &DisplayConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let base = fmt::layer()
        .with_ansi(display.colors && format != Format::Json)
        .with_target(display.target)
        .with_file(display.source)
        .with_line_number(display.source)
        .with_thread_ids(display.thread_ids);

    match (format, display.time) {
        (Format::Pretty, true) => base.pretty().boxed(),
        (Format::Pretty, false) => base.pretty().without_time().boxed(),
        (Format::Compact, true) => base.compact().boxed(),
        (Format::Compact, false) => base.compact().without_time().boxed(),
        (Format::Json, true) => base.json().flatten_event(display.flatten).boxed(),
        (Format::Json, false) => base
            .json()
            .flatten_event(display.flatten)
            .without_time()
            .boxed(),
    }
}
