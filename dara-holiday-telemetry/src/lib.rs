use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const DEFAULT_LOG_LEVEL: &str = "info,dara_holiday_backend=debug,hyper=info,h2=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into())
}

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_LOG_LEVEL`].
///
/// Calling it a second time (tests do) leaves the first subscriber in place.
pub fn setup_telemetry() {
    let stdout_log = tracing_subscriber::fmt::layer().with_target(true);

    let result = tracing_subscriber::registry()
        .with(stdout_log.with_filter(env_filter()))
        .try_init();
    if let Err(err) = result {
        debug!("telemetry already initialized: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_LEVEL).is_ok());
    }

    #[test]
    fn setup_twice_is_harmless() {
        setup_telemetry();
        setup_telemetry();
    }
}
