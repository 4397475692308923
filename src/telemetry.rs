//! Opt-in tracing setup for hosts embedding the graph.
//!
//! The engine only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that do not care about wiring their own subscriber can call
//! [`init_default_tracing`] once at startup (requires the `telemetry` feature).

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `true` when the subscriber was installed, `false` when the
/// `telemetry` feature is disabled or another global subscriber won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
