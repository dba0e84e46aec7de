//! Best-effort diagnostic reporting for absorbed failures.
//!
//! When the hero facade recovers from a failed operation, the underlying
//! error is handed to a [`DiagnosticSink`] before the fallback value is
//! returned. The sink is fire-and-forget: it must never panic and never
//! block the operation that is recovering.
//!
//! The default sink, [`TracingSink`], forwards to the `tracing`
//! infrastructure. Tests typically substitute a recording sink.

use std::error::Error;

/// A best-effort sink for errors absorbed by the facade's recovery policy.
///
/// Implementations must not panic and must not block the caller.
pub trait DiagnosticSink: Send + Sync {
    /// Reports an error. Best-effort; there is no failure channel.
    fn report(&self, error: &(dyn Error + 'static));
}

/// The default diagnostic sink, emitting through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &(dyn Error + 'static)) {
        tracing::error!(error = %error, "hero operation failed");
    }
}
