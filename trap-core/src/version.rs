//! Build metadata.
//!
//! Read-only version identifiers for distribution tooling, sourced from the
//! cargo manifest at compile time. They carry no behavior.

/// Full semver version string of the panic-trap workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major version component, as a string.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor version component, as a string.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch version component, as a string.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
