use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "backend=debug").
#[derive(Debug)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub target: env_logger::Target,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            target: env_logger::Target::Stdout,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger; later calls are ignored.
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

        builder.target(config.target);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_go_to_stdout_by_default() {
        assert!(matches!(
            LoggingConfig::default().target,
            env_logger::Target::Stdout
        ));
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("warn".to_string()),
            ..Default::default()
        });
        init_logging(LoggingConfig::default());
        log::warn!("logger still usable");
    }
}
