use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LOG_FILTER: &str = "greeter_core=info,bootstrap=info,runner_local=info";

/// Installs the global subscriber. `RUST_LOG` wins over `fallback_filter`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(fallback_filter: Option<&str>) {
    let fallback = fallback_filter.unwrap_or(DEFAULT_LOG_FILTER).to_string();
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(e) = installed {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(None);
        init_tracing(Some("debug"));
        tracing::info!("subscriber installed");
    }
}
