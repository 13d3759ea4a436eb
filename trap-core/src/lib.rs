//! # trap-core
//!
//! Pure panic-capture boundary for panic-trap (no I/O, instant tests).
//!
//! This crate converts Rust's implicit, stack-unwinding panic propagation
//! into an explicit return value: run a unit of work under a guard, and if
//! it panics, hand the panic back to the caller as a [`CapturedPanic`]
//! instead of letting it unwind further. Callers that cannot use native
//! unwinding — foreign-language bindings above all — detect and inspect the
//! fault by ordinary value inspection.
//!
//! ## Design Philosophy
//!
//! All operations in this crate are **pure** - they take input and produce
//! output without side effects beyond those of the wrapped work itself. The
//! boundary does not log, retry, or transform the panic's content; it only
//! arrests propagation and reifies the panic as a value.
//!
//! ## What is (and is not) caught
//!
//! Exactly one fault kind is intercepted: the unwinding panic. Process
//! aborts (`std::process::abort`, double panics, foreign exceptions) are not
//! caught and terminate the process per platform default. In particular,
//! binaries built with `panic = "abort"` have no unwinding at all, so this
//! boundary captures nothing there - ports embedding this crate must ship
//! with the default `panic = "unwind"` strategy.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod captured;
pub mod version;

pub use capture::{catch_panic, try_catch};
pub use captured::CapturedPanic;
pub use version::{VERSION, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};
