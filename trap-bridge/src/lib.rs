//! # trap-bridge
//!
//! FFI-friendly bridge layer for panic-trap multi-language bindings.
//!
//! This crate flattens [`trap_core`]'s capture boundary into types that
//! napi-rs, PyO3, and Tauri plugin layers can wrap directly.
//!
//! ## Design
//!
//! - All types are FFI-friendly: no generics, no lifetimes, no trait objects
//! - `String` instead of `&str`, owned fields instead of borrows
//! - The raw `dyn Any` payload never crosses the bridge; it flattens to
//!   human-readable strings
//! - Thin wrappers — all real logic lives in trap-core
//!
//! The boundary captures unwinding panics only. Aborts, and anything built
//! with `panic = "abort"`, terminate the process as usual; see the trap-core
//! crate docs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod invoke;
pub mod report;

pub use error::BridgeError;
pub use invoke::{invoke, invoke_value, version_info};
pub use report::{PanicReport, VersionInfo};
