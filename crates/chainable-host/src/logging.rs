//! Logging shim.
//!
//! With the `tracing` feature `trace!` and `warn!` are `tracing`'s own. Without
//! it they expand to nothing, so call sites need no `cfg` of their own.
//!
//! `tracing-json` adds [`init_json`], which installs a JSON subscriber
//! filtered by `RUST_LOG`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{trace, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {trace, warn_ as warn};

/// Install a global JSON subscriber for production logging.
///
/// Fails if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
}
