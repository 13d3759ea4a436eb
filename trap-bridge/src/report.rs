//! FFI-friendly types for trap-bridge.
//!
//! All types here are flat — no generics, no lifetimes, no trait objects.
//! Everything is owned and serializable, so binding layers can marshal
//! reports across to JavaScript or Python as JSON.

use serde::Serialize;

/// Flattened form of a captured panic.
///
/// Produced by [`invoke`](crate::invoke) / [`invoke_value`](crate::invoke_value)
/// when the wrapped work panicked. The raw payload does not cross the
/// bridge; what survives is the exact string reason (when the panic carried
/// one) and an always-present displayable summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanicReport {
    /// The exact panic message, verbatim, when the payload was a string.
    /// `None` for opaque payloads (`std::panic::panic_any` with non-string
    /// types).
    pub reason: Option<String>,
    /// Human-readable one-line description, present in all cases. Bindings
    /// that want a single displayable field use this.
    pub summary: String,
}

/// Flat build-metadata record for distribution tooling.
///
/// Sourced from the cargo manifest at compile time; carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Full semver version string.
    pub version: String,
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
    /// Patch version component.
    pub patch: u32,
}
