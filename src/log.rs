use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::env::get_env_bool;

// The CLI should say what it converted without the user exporting RUST_LOG.
const DEFAULT_DIRECTIVE: &str = "info";

struct LogConfig {
    json: bool,
    perf: bool,
}

impl LogConfig {
    fn from_env() -> Self {
        Self {
            json: get_env_bool("LOG_JSON").unwrap_or(false),
            perf: get_env_bool("LOG_PERF").unwrap_or(false),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

pub fn init() {
    let config = LogConfig::from_env();

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let builder = if config.perf {
        builder.with_span_events(FmtSpan::CLOSE)
    } else {
        builder
    };

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_info_when_rust_log_unset() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(env_filter().to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn log_config_defaults_off() {
        std::env::remove_var("LOG_JSON");
        std::env::remove_var("LOG_PERF");
        let config = LogConfig::from_env();
        assert!(!config.json);
        assert!(!config.perf);
    }
}
