use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: default level when `RUST_LOG` is unset (default: "info")
/// - `LOG_DIR`: directory for rolling log files (default: "storage/logs")
/// - `LOG_TO_FILE`: set to `false` to log to the console only (default: true)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: PathBuf,
    pub to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: PathBuf::from("storage/logs"),
            to_file: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or(defaults.level),
            directory: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.directory),
            to_file: std::env::var("LOG_TO_FILE")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(defaults.to_file),
        }
    }

    /// Console filter used when `RUST_LOG` is not set. Noisy dependencies
    /// are held at warn.
    pub fn default_directives(&self) -> String {
        format!("{},tower_http=warn,hyper=warn,h2=warn", self.level)
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Vec<WorkerGuard>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let mut guards = Vec::new();
    let (error_layer, json_layer) = if config.to_file {
        fs::create_dir_all(&config.directory).with_context(|| {
            format!(
                "failed to create log directory {}",
                config.directory.display()
            )
        })?;

        // Errors only, plain text
        let (error_writer, error_guard) =
            tracing_appender::non_blocking(rolling::daily(&config.directory, "bookwell.log"));
        guards.push(error_guard);
        let error_layer = fmt::layer()
            .with_writer(error_writer)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(EnvFilter::new("error"));

        // Structured logs for ingestion
        let (json_writer, json_guard) =
            tracing_appender::non_blocking(rolling::daily(&config.directory, "bookwell.json"));
        guards.push(json_guard);
        let json_layer = fmt::layer()
            .json()
            .with_writer(json_writer)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new(&config.level));

        (Some(error_layer), Some(json_layer))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_layer)
        .with(json_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(
        to_file = config.to_file,
        directory = %config.directory.display(),
        "Logging initialized"
    );

    Ok(guards)
}
