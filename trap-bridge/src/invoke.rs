//! Bridge-level capture operations.
//!
//! Thin wrappers over [`trap_core`]'s boundary that accept arbitrary
//! closures and return flat reports. Foreign callbacks cannot carry Rust's
//! `UnwindSafe` bound, so the bridge asserts it internally - the same stance
//! napi-rs and PyO3 layers take toward callbacks handed in from the host
//! runtime.

use crate::error::BridgeError;
use crate::report::{PanicReport, VersionInfo};
use std::panic::AssertUnwindSafe;
use trap_core::{catch_panic, try_catch, CapturedPanic};

/// Run `work` and capture an unwinding panic as a flat report.
///
/// Returns `None` when the work completes normally (any produced value is
/// discarded), `Some(PanicReport)` when it panics. The report's `reason`
/// matches the panic message verbatim when there was one.
pub fn invoke<F>(work: F) -> Option<PanicReport>
where
    F: FnOnce(),
{
    catch_panic(AssertUnwindSafe(work)).map(|captured| flatten(&captured))
}

/// Run `work`, keep its result, and flatten a panic into the error.
///
/// The value-preserving form of [`invoke`], for bridge calls whose work
/// produces output to marshal back to the host runtime.
pub fn invoke_value<F, T>(work: F) -> Result<T, PanicReport>
where
    F: FnOnce() -> T,
{
    try_catch(AssertUnwindSafe(work)).map_err(|captured| flatten(&captured))
}

/// Build-metadata record from the compile-time version constants.
pub fn version_info() -> Result<VersionInfo, BridgeError> {
    Ok(VersionInfo {
        version: trap_core::VERSION.to_string(),
        major: parse_component("major", trap_core::VERSION_MAJOR)?,
        minor: parse_component("minor", trap_core::VERSION_MINOR)?,
        patch: parse_component("patch", trap_core::VERSION_PATCH)?,
    })
}

// --- Internal conversion helpers ---

/// Flatten a `CapturedPanic` to an FFI-friendly `PanicReport`.
///
/// The raw payload stays on this side of the bridge; only strings cross.
fn flatten(captured: &CapturedPanic) -> PanicReport {
    PanicReport {
        reason: captured.reason().map(str::to_string),
        summary: captured.to_string(),
    }
}

/// Parse one cargo version component.
fn parse_component(name: &str, value: &str) -> Result<u32, BridgeError> {
    value
        .parse()
        .map_err(|_| BridgeError::InvalidVersion(format!("{name} = '{value}'")))
}
