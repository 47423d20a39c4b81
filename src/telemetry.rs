//! Telemetry helpers for hosts embedding the heart-rate chart.
//!
//! The chart only emits `tracing` events. Hosts either call
//! `init_default_tracing` or install their own subscriber.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "heart_rate_chart=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
