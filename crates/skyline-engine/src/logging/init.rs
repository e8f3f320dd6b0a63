use std::sync::Once;

use log::LevelFilter;

/// Logger settings for the studio and for hosts without their own logger.
///
/// `env_filter` uses the `env_logger` directive syntax, e.g.
/// `"skyline_art=trace,skyline_engine=debug"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Level applied when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a timestamp. Off keeps studio output diffable.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn filter(mut self, v: impl Into<String>) -> Self { self.env_filter = Some(v.into()); self }
    pub fn default_level(mut self, v: LevelFilter) -> Self { self.default_level = v; self }
    pub fn write_style(mut self, v: env_logger::WriteStyle) -> Self { self.write_style = v; self }
    pub fn timestamps(mut self, v: bool) -> Self { self.timestamps = v; self }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, once per process.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`.
/// Returns `true` only for the call that installed the logger. Later calls, or
/// a logger already installed by the host, leave logging untouched.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(config.default_level),
        };
        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = LoggingConfig::default().filter("skyline_art=trace").default_level(LevelFilter::Warn).timestamps(true);
        assert_eq!(cfg.env_filter.as_deref(), Some("skyline_art=trace"));
        assert_eq!(cfg.default_level, LevelFilter::Warn);
        assert!(cfg.timestamps);
    }

    #[test]
    fn only_the_first_call_installs() {
        init_logging(LoggingConfig::default());
        assert!(!init_logging(LoggingConfig::default()));
    }
}
