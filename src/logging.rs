//! Logger initialization.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"flagmaker=debug"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, `RUST_LOG` is used when `None`.
    pub env_filter: Option<String>,
    /// Controls ANSI coloring.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once, later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.write_style(config.write_style);
        // Tests may have installed a logger already.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
