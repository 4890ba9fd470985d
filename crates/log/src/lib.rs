//! # fieldcheck-log
//!
//! Installs a `tracing-subscriber` stack for programs and tests that embed
//! the validation engine. The engine itself only emits `tracing` events;
//! this crate decides where they go.
//!
//! ```no_run
//! use fieldcheck_log::Config;
//!
//! let _guard = fieldcheck_log::init_with(Config::development())?;
//! tracing::info!("ready");
//! # Ok::<(), fieldcheck_log::LogError>(())
//! ```
//!
//! Environment variables read by [`Config::from_env`]:
//!
//! | variable                | meaning                                 |
//! |-------------------------|-----------------------------------------|
//! | `FIELDCHECK_LOG`        | filter directives, e.g. `info,fieldcheck_validator=trace` |
//! | `RUST_LOG`              | fallback when `FIELDCHECK_LOG` is unset |
//! | `FIELDCHECK_LOG_FORMAT` | `pretty`, `compact` or `json`           |
//! | `FIELDCHECK_LOG_COLORS` | `true` / `false`                        |
//! | `FIELDCHECK_LOG_TIME`   | `true` / `false`                        |
//! | `FIELDCHECK_LOG_SOURCE` | `true` / `false`                        |

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Installs the logger configured from the environment.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Installs the logger described by `config`.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
