//! Opt-in `tracing` setup for binaries that render with `graph-plot`.
//!
//! The library only emits events. Session construction and axis
//! configuration log at `debug` under `graph_plot::api`, per-call series
//! summaries and clip transitions log at `trace`, and backend failures log at
//! `warn` under `graph_plot::render`. Hosts with their own subscriber never
//! need this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "warn,graph_plot=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or
/// [`DEFAULT_DIRECTIVES`] when it is unset or unparsable.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_DIRECTIVES));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact `fmt` subscriber with explicit filter `directives`,
/// e.g. `"graph_plot::core::clip=trace"`.
///
/// Returns `false` when the directives do not parse, the `telemetry` feature
/// is off, or a global subscriber is already installed.
#[must_use]
pub fn init_tracing(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return tracing_subscriber::EnvFilter::try_new(directives).is_ok_and(install);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_global_subscriber_is_installed() {
        let _ = init_tracing("graph_plot=trace");
        assert!(!init_tracing("graph_plot=trace"));
        assert!(!init_default_tracing());
    }

    #[test]
    fn malformed_directives_are_rejected() {
        assert!(!init_tracing("graph_plot=loud"));
    }
}
