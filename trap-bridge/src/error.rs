//! Error types for trap-bridge.
//!
//! Captured panics are not errors here: presence or absence of a
//! [`PanicReport`](crate::PanicReport) is the whole failure surface of the
//! capture operations. This enum covers the bridge's own faults only.

use thiserror::Error;

/// Errors from trap-bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A compile-time version component did not parse as a number.
    #[error("invalid version metadata: {0}")]
    InvalidVersion(String),
}
