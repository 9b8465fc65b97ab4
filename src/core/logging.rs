//! Diagnostic logging to stderr.
//!
//! Normal command output goes to stdout; `tracing` events go to stderr so
//! they never interleave with panels. Filter with `GITH_UB_LOG`
//! (e.g. `GITH_UB_LOG=gith_ub=debug`), default `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GITH_UB_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
